#[tokio::main]
async fn main() {
    if let Err(e) = reliv_lib::run().await {
        eprintln!("reliv: {e}");
        std::process::exit(1);
    }
}

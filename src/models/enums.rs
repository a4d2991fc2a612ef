use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde representation is the same string as `as_str`.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(
    /// Binary sex model used by every sex-specific formula and band.
    Sex {
        Male => "male",
        Female => "female",
    }
);

impl Sex {
    /// Lenient mapping for free-text intake values ("Male", "m", "Female",
    /// "Others", ...). Anything that is not recognisably male uses the
    /// female formulas, matching the kiosk's historical reports.
    pub fn from_intake(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "m" | "male" | "man" => Sex::Male,
            _ => Sex::Female,
        }
    }

    pub fn is_male(self) -> bool {
        self == Sex::Male
    }
}

str_enum!(
    /// How blank and zero vitals are interpreted.
    #[derive(Default)]
    ReadingPolicy {
        #[default]
        Legacy => "legacy",
        Strict => "strict",
    }
);

str_enum!(
    /// Rendering surface a report is built for. Numbers never differ
    /// between targets; only the downstream renderer does.
    #[derive(Default)]
    RenderTarget {
        #[default]
        Screen => "screen",
        PdfVector => "pdf_vector",
        PdfFromImage => "pdf_from_image",
    }
);

str_enum!(
    /// Whether fat-free mass came from the impedance equation or from the
    /// no-hardware fallback.
    MeasurementMode {
        Bioimpedance => "bioimpedance",
        Estimated => "estimated",
    }
);

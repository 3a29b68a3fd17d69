/// Which way the translator works
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Photograph of hieroglyphs → transliteration, translation, context
    Decode,
    /// French text → hieroglyphs, transliteration, context
    #[default]
    Encode,
}

impl Mode {
    /// Tab label in the mode switcher
    pub fn label(self) -> &'static str {
        match self {
            Mode::Decode => "DÉCODEUR",
            Mode::Encode => "TRADUCTEUR",
        }
    }

    /// Status line shown while a request of this mode is running
    pub fn loading_message(self) -> &'static str {
        match self {
            Mode::Decode => "Analyse en cours...",
            Mode::Encode => "Conversion en cours...",
        }
    }

    /// User-facing text for any failed request of this mode
    pub fn failure_message(self) -> &'static str {
        match self {
            Mode::Decode => "Impossible de décrypter l'image. Assurez-vous qu'elle est nette.",
            Mode::Encode => "Impossible de convertir le texte.",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Decode => "decode",
            Mode::Encode => "encode",
        })
    }
}

use alloc::format;
use alloc::string::String;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lettergrid_protocol::ImagePayload;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Gif,
    Jpeg,
}

impl ImageFormat {
    const PNG_MAGIC: &'static [u8] = b"\x89PNG\r\n\x1a\n";
    const GIF_MAGIC: &'static [u8] = b"GIF8";

    /// Guesses the format from the leading bytes, JPEG unless proven otherwise.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(Self::PNG_MAGIC) {
            Self::Png
        } else if bytes.starts_with(Self::GIF_MAGIC) {
            Self::Gif
        } else {
            Self::Jpeg
        }
    }

    pub const fn mime(self) -> &'static str {
        use ImageFormat::*;
        match self {
            Png => "image/png",
            Gif => "image/gif",
            Jpeg => "image/jpeg",
        }
    }
}

/// Picture puzzle: the word is hidden in an image and typed in as a single guess.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageReveal {
    image: String,
    format: ImageFormat,
    solution: String,
    state: PuzzleState,
}

impl ImageReveal {
    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Inline `src` for an `<img>` element.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.format.mime(), self.image)
    }

    pub fn solution_len(&self) -> usize {
        self.solution.chars().count()
    }

    pub fn can_guess(&self) -> bool {
        !self.state.is_solved()
    }
}

impl GridPuzzle for ImageReveal {
    type Payload = ImagePayload;

    fn initialize(payload: Self::Payload) -> Result<Self> {
        let bytes = STANDARD
            .decode(payload.data.as_bytes())
            .map_err(|_| PuzzleError::MalformedPayload("image data is not valid base64"))?;
        if bytes.is_empty() {
            return Err(PuzzleError::MalformedPayload("image data is empty"));
        }
        if payload.solution.trim().is_empty() {
            return Err(PuzzleError::MalformedPayload("solution is empty"));
        }

        let format = ImageFormat::sniff(&bytes);
        log::debug!("image puzzle: {} bytes of {:?}", bytes.len(), format);

        Ok(Self {
            image: payload.data,
            format,
            solution: normalize_word(&payload.solution),
            state: PuzzleState::Active,
        })
    }

    fn handle_cell_click(&mut self, _coords: Coord2) -> Outcome {
        Outcome::NoChange
    }

    fn handle_submit(&mut self, input: &str) -> Outcome {
        if self.state.is_solved() || normalize_word(input) != self.solution {
            return Outcome::NoChange;
        }
        settle(&mut self.state, true)
    }

    fn is_solved(&self) -> bool {
        self.state.is_solved()
    }
}

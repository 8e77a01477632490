use clap::Parser;
use lettergrid_core::protocol::{PuzzleKind, UnknownPuzzleKind};
use thiserror::Error;
use web_sys::Element;

pub(crate) const DEFAULT_API_URL: &str = "/api/";
pub(crate) const DEFAULT_IMAGE_WIDTH: u32 = 300;

/// Arguments taken from the location hash, e.g. `#--puzzle=word_square&-vv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Puzzle to play, overrides the host element's `data-puzzle`
    #[arg(short, long)]
    pub puzzle: Option<PuzzleKind>,

    /// Root of the puzzle API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Display width of picture puzzles, in pixels
    #[arg(long)]
    pub image_width: Option<u32>,
}

impl Args {
    pub(crate) fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        // the leading empty segment stands in for the binary name
        Self::try_parse_from(hash.split(['#', '&']))
    }

    pub(crate) fn fallback() -> Self {
        Self {
            verbose: clap_verbosity_flag::Verbosity::new(0, 0),
            puzzle: None,
            api_url: None,
            image_width: None,
        }
    }
}

/// `data-*` attributes of the element the app is mounted on.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct HostAttributes {
    pub puzzle: Option<String>,
    pub api_url: Option<String>,
    pub image_width: Option<String>,
}

impl HostAttributes {
    pub(crate) fn from_element(element: &Element) -> Self {
        Self {
            puzzle: element.get_attribute("data-puzzle"),
            api_url: element.get_attribute("data-api-url"),
            image_width: element.get_attribute("data-image-width"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum ConfigError {
    #[error("No puzzle configured, set data-puzzle on the host element")]
    MissingKind,
    #[error(transparent)]
    UnknownKind(#[from] UnknownPuzzleKind),
    #[error("Invalid image width {0:?}")]
    InvalidImageWidth(String),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WidgetConfig {
    pub kind: PuzzleKind,
    pub api_url: String,
    pub image_width: u32,
}

impl WidgetConfig {
    /// Hash arguments win over host attributes, which win over defaults.
    pub(crate) fn resolve(args: &Args, host: &HostAttributes) -> Result<Self, ConfigError> {
        let kind = match (args.puzzle, host.puzzle.as_deref()) {
            (Some(kind), _) => kind,
            (None, Some(slug)) => slug.parse::<PuzzleKind>()?,
            (None, None) => return Err(ConfigError::MissingKind),
        };

        let api_url = args
            .api_url
            .clone()
            .or_else(|| host.api_url.clone())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let image_width = match (args.image_width, host.image_width.as_deref()) {
            (Some(width), _) => width,
            (None, Some(width)) => width
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidImageWidth(width.to_string()))?,
            (None, None) => DEFAULT_IMAGE_WIDTH,
        };

        Ok(Self {
            kind,
            api_url,
            image_width,
        })
    }

    pub(crate) fn endpoint(&self) -> String {
        self.kind.endpoint(&self.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(puzzle: &str) -> HostAttributes {
        HostAttributes {
            puzzle: Some(puzzle.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn host_attributes_with_defaults() {
        let config = WidgetConfig::resolve(&Args::fallback(), &host("word_square")).unwrap();

        assert_eq!(config.kind, PuzzleKind::WordSquare);
        assert_eq!(config.image_width, DEFAULT_IMAGE_WIDTH);
        assert_eq!(config.endpoint(), "/api/puzzles/word_square/");
    }

    #[test]
    fn hash_arguments_override_host_attributes() {
        let hash = "#--puzzle=word_ladder&--api-url=/v2/&--image-width=480";
        let args = Args::from_location_hash(hash).unwrap();
        let host = HostAttributes {
            puzzle: Some("word_square".to_string()),
            api_url: Some("/api/".to_string()),
            image_width: Some("100".to_string()),
        };

        let config = WidgetConfig::resolve(&args, &host).unwrap();

        assert_eq!(config.kind, PuzzleKind::WordLadder);
        assert_eq!(config.endpoint(), "/v2/puzzles/word_ladder/");
        assert_eq!(config.image_width, 480);
    }

    #[test]
    fn empty_hash_parses() {
        let args = Args::from_location_hash("").unwrap();

        assert!(args.puzzle.is_none());
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn verbosity_flags_raise_log_level() {
        let args = Args::from_location_hash("#-vv").unwrap();

        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn unknown_or_missing_kind_is_an_error() {
        assert_eq!(
            WidgetConfig::resolve(&Args::fallback(), &HostAttributes::default()),
            Err(ConfigError::MissingKind)
        );
        assert!(matches!(
            WidgetConfig::resolve(&Args::fallback(), &host("crossword")),
            Err(ConfigError::UnknownKind(_))
        ));
        assert!(Args::from_location_hash("#--puzzle=crossword").is_err());
    }

    #[test]
    fn invalid_image_width_is_reported() {
        let host = HostAttributes {
            puzzle: Some("knight_move".to_string()),
            image_width: Some("wide".to_string()),
            ..Default::default()
        };

        assert_eq!(
            WidgetConfig::resolve(&Args::fallback(), &host),
            Err(ConfigError::InvalidImageWidth("wide".to_string()))
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The selector did not match any element.
    TargetNotFound { selector: String },
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselError::TargetNotFound { selector } => {
                write!(f, "carousel target `{selector}` not found")
            }
        }
    }
}

impl std::error::Error for CarouselError {}

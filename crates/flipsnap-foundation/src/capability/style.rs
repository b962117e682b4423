use flipsnap_animation::CubicBezier;
use flipsnap_ui_graphics::Px;
use std::fmt;

/// Horizontal translation rendered either as `translate3d` or `translate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translate {
    pub x: f32,
    pub three_d: bool,
}

impl Translate {
    pub fn new(x: f32, three_d: bool) -> Self {
        Self { x, three_d }
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.three_d {
            write!(f, "translate3d({}, 0, 0)", Px(self.x))
        } else {
            write!(f, "translate({}, 0)", Px(self.x))
        }
    }
}

/// One style write requested by the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleDeclaration {
    Transform(Translate),
    /// `transition-property: transform`
    TransitionProperty,
    TransitionTimingFunction(CubicBezier),
    TransitionDuration { millis: u64 },
    /// `position: relative`
    PositionRelative,
    Left(Px),
    Width(Px),
    /// `width: auto`
    WidthAuto,
    /// `touch-action: pan-y`
    TouchActionPanY,
}

impl StyleDeclaration {
    /// Unprefixed CSS property name.
    pub fn property(&self) -> &'static str {
        match self {
            StyleDeclaration::Transform(_) => "transform",
            StyleDeclaration::TransitionProperty => "transition-property",
            StyleDeclaration::TransitionTimingFunction(_) => "transition-timing-function",
            StyleDeclaration::TransitionDuration { .. } => "transition-duration",
            StyleDeclaration::PositionRelative => "position",
            StyleDeclaration::Left(_) => "left",
            StyleDeclaration::Width(_) | StyleDeclaration::WidthAuto => "width",
            StyleDeclaration::TouchActionPanY => "touch-action",
        }
    }

    pub fn value(&self) -> String {
        match self {
            StyleDeclaration::Transform(translate) => translate.to_string(),
            StyleDeclaration::TransitionProperty => "transform".to_string(),
            StyleDeclaration::TransitionTimingFunction(curve) => curve.to_string(),
            StyleDeclaration::TransitionDuration { millis } => format!("{millis}ms"),
            StyleDeclaration::PositionRelative => "relative".to_string(),
            StyleDeclaration::Left(px) | StyleDeclaration::Width(px) => px.to_string(),
            StyleDeclaration::WidthAuto => "auto".to_string(),
            StyleDeclaration::TouchActionPanY => "pan-y".to_string(),
        }
    }
}

/// Style-application capability of the container element.
pub trait StyleSink {
    fn apply_style(&self, declaration: &StyleDeclaration);

    fn apply_styles(&self, declarations: &[StyleDeclaration]) {
        for declaration in declarations {
            self.apply_style(declaration);
        }
    }
}

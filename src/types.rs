/// A focusable toolbar control, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusItem {
    Exit,
    Start,
    Stop,
    Clear,
    /// The hue shift slider.
    HueShift,
    /// The dots-per-frame spinner.
    DotsPerFrame,
}

impl FocusItem {
    pub const ORDER: [FocusItem; 6] = [
        FocusItem::Exit,
        FocusItem::Start,
        FocusItem::Stop,
        FocusItem::Clear,
        FocusItem::HueShift,
        FocusItem::DotsPerFrame,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&i| i == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_button(self) -> bool {
        matches!(
            self,
            FocusItem::Exit | FocusItem::Start | FocusItem::Stop | FocusItem::Clear
        )
    }

    /// Button caption; sliders and spinners carry their own labels.
    pub fn label(self) -> &'static str {
        match self {
            FocusItem::Exit => "Exit",
            FocusItem::Start => "Start",
            FocusItem::Stop => "Stop",
            FocusItem::Clear => "Clear",
            FocusItem::HueShift => "HUE SHIFT",
            FocusItem::DotsPerFrame => "dotsPerFrame",
        }
    }

    pub fn shortcut(self) -> &'static str {
        match self {
            FocusItem::Exit => "q",
            FocusItem::Start => "s",
            FocusItem::Stop => "p",
            FocusItem::Clear => "c",
            FocusItem::HueShift => "[ ]",
            FocusItem::DotsPerFrame => "- +",
        }
    }
}

/// What the pointer is doing relative to the canvas, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseReadout {
    Outside,
    Moved { x: f64, y: f64 },
    Dragged { x: f64, y: f64 },
}

impl std::fmt::Display for MouseReadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MouseReadout::Outside => write!(f, "Outside"),
            MouseReadout::Moved { x, y } => write!(f, "Moved: ({:.2},{:.2})", x, y),
            MouseReadout::Dragged { x, y } => write!(f, "Dragged: ({:.2},{:.2})", x, y),
        }
    }
}

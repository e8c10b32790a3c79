//! Multi-view generation targets: 3D model views and elevation sketches.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The six fixed viewpoints for 3D multi-view generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewAngle {
    Front,
    LeftSide,
    RightSide,
    Back,
    Top,
    Isometric,
}

impl ViewAngle {
    /// All views, in the order they are requested and displayed.
    pub const ALL: &'static [ViewAngle] = &[
        ViewAngle::Front,
        ViewAngle::LeftSide,
        ViewAngle::RightSide,
        ViewAngle::Back,
        ViewAngle::Top,
        ViewAngle::Isometric,
    ];

    /// Stable key used in serialized view maps.
    pub fn key(&self) -> &'static str {
        match self {
            ViewAngle::Front => "front",
            ViewAngle::LeftSide => "leftSide",
            ViewAngle::RightSide => "rightSide",
            ViewAngle::Back => "back",
            ViewAngle::Top => "top",
            ViewAngle::Isometric => "isometric",
        }
    }

    /// Human-readable name embedded in generation prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewAngle::Front => "Front",
            ViewAngle::LeftSide => "Left Side",
            ViewAngle::RightSide => "Right Side",
            ViewAngle::Back => "Back",
            ViewAngle::Top => "Top",
            ViewAngle::Isometric => "Isometric",
        }
    }
}

impl fmt::Display for ViewAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Mapping from view angle to an image data URL.
///
/// Built once per 3D-generation call; all-or-nothing — a complete map or
/// no map at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelViews(pub BTreeMap<ViewAngle, String>);

impl ModelViews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, view: ViewAngle, data_url: String) {
        self.0.insert(view, data_url);
    }

    pub fn get(&self, view: ViewAngle) -> Option<&str> {
        self.0.get(&view).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every view in [`ViewAngle::ALL`] is present.
    pub fn is_complete(&self) -> bool {
        ViewAngle::ALL.iter().all(|v| self.0.contains_key(v))
    }
}

/// The three orthographic views produced as elevation sketches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElevationView {
    Front,
    Left,
    Top,
}

impl ElevationView {
    pub const ALL: &'static [ElevationView] = &[
        ElevationView::Front,
        ElevationView::Left,
        ElevationView::Top,
    ];

    /// Human-readable name embedded in generation prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            ElevationView::Front => "Front",
            ElevationView::Left => "Left",
            ElevationView::Top => "Top",
        }
    }
}

impl fmt::Display for ElevationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Fixed triple of SVG markup strings, one per orthographic view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevationSketchSet {
    pub front: String,
    pub left: String,
    pub top: String,
}

impl ElevationSketchSet {
    pub fn get(&self, view: ElevationView) -> &str {
        match view {
            ElevationView::Front => &self.front,
            ElevationView::Left => &self.left,
            ElevationView::Top => &self.top,
        }
    }
}

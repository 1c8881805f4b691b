//! Diagram configuration
//!
//! Everything the renderer needs that is not part of the descriptors themselves: how names are printed and what
//! goes into the document header.

use std::path::PathBuf;

use crate::descriptor::Visibility;

/// Diagram rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagramConfig {
    /// Prefix type names with their package
    pub show_package: bool,
    /// Scanned directories, listed in the header comment
    pub directories: Vec<PathBuf>,
    /// Thresholds the descriptors were generated with, listed in the header comment
    pub attribute_visibility: Visibility,
    pub method_visibility: Visibility,
    /// PlantUML `scale` argument, e.g. `1.5`, `200*100` or `max 1024 height`
    pub scale: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
    /// Lay the diagram out left to right instead of top to bottom
    pub left_to_right: bool,
}

impl DiagramConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show_package(mut self, show: bool) -> Self {
        self.show_package = show;
        self
    }

    pub fn with_directories(mut self, directories: Vec<PathBuf>) -> Self {
        self.directories = directories;
        self
    }

    pub fn with_visibilities(mut self, attributes: Visibility, methods: Visibility) -> Self {
        self.attribute_visibility = attributes;
        self.method_visibility = methods;
        self
    }

    pub fn with_scale(mut self, scale: Option<String>) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }

    pub fn with_left_to_right(mut self, left_to_right: bool) -> Self {
        self.left_to_right = left_to_right;
        self
    }
}

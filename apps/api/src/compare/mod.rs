//! Comparison View — pure derivation over an [`ImprovementResult`] plus a
//! [`ViewMode`]. Renders one of three shapes and produces download requests
//! for the file exporter; nothing here mutates the stored result.

use crate::diff::{diff_words, DiffSegment};
use crate::models::{ImprovementResult, MediaType};

/// Which variant of the result the view shows. Pure UI state, not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Default once a result arrives.
    #[default]
    Improved,
    Comparison,
    Original,
}

/// One rendered text panel: a title plus the content split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl Panel {
    fn new(title: &'static str, content: &str) -> Self {
        Panel {
            title,
            lines: content.lines().map(str::to_string).collect(),
        }
    }
}

/// Exactly one of the three view shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedView {
    Single {
        panel: Panel,
    },
    SideBySide {
        original: Panel,
        improved: Panel,
        /// Word-level changes from original to improved, for highlighting.
        changes: Vec<DiffSegment>,
    },
}

/// What the download action hands to the file exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub content: String,
    pub media_type: MediaType,
    /// Filename without extension; the exporter appends it.
    pub base_name: String,
}

/// View state over one improvement result.
#[derive(Debug, Clone)]
pub struct ComparisonView {
    result: ImprovementResult,
    source_filename: String,
    source_type: MediaType,
    mode: ViewMode,
}

impl ComparisonView {
    pub fn new(result: ImprovementResult, source_filename: String, source_type: MediaType) -> Self {
        ComparisonView {
            result,
            source_filename,
            source_type,
            mode: ViewMode::default(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn result(&self) -> &ImprovementResult {
        &self.result
    }

    /// Renders the view for the current mode.
    pub fn render(&self) -> RenderedView {
        match self.mode {
            ViewMode::Improved => RenderedView::Single {
                panel: Panel::new("Improved Version", &self.result.improved_content),
            },
            ViewMode::Original => RenderedView::Single {
                panel: Panel::new("Original Version", &self.result.original_content),
            },
            ViewMode::Comparison => RenderedView::SideBySide {
                original: Panel::new("Original Version", &self.result.original_content),
                improved: Panel::new("Improved Version", &self.result.improved_content),
                changes: diff_words(&self.result.original_content, &self.result.improved_content),
            },
        }
    }

    /// Builds the download payload for the currently selected variant: the
    /// improved text only in `Improved` mode, the original otherwise. The
    /// improved variant gets an `_improved` filename suffix.
    pub fn download_request(&self) -> DownloadRequest {
        let improved = self.mode == ViewMode::Improved;
        let stem = filename_stem(&self.source_filename);
        DownloadRequest {
            content: if improved {
                self.result.improved_content.clone()
            } else {
                self.result.original_content.clone()
            },
            media_type: self.source_type,
            base_name: if improved {
                format!("{stem}_improved")
            } else {
                stem.to_string()
            },
        }
    }
}

fn filename_stem(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::EditType;

    fn view() -> ComparisonView {
        ComparisonView::new(
            ImprovementResult {
                original_content: "A B".to_string(),
                improved_content: "A C".to_string(),
                suggestions: vec![],
            },
            "resume.pdf".to_string(),
            MediaType::Pdf,
        )
    }

    #[test]
    fn defaults_to_improved_mode() {
        let view = view();
        assert_eq!(view.mode(), ViewMode::Improved);
        match view.render() {
            RenderedView::Single { panel } => {
                assert_eq!(panel.title, "Improved Version");
                assert_eq!(panel.lines, vec!["A C".to_string()]);
            }
            other => panic!("expected single panel, got {other:?}"),
        }
    }

    #[test]
    fn comparison_mode_renders_both_panels_with_the_diff() {
        let mut view = view();
        view.set_mode(ViewMode::Comparison);
        match view.render() {
            RenderedView::SideBySide {
                original,
                improved,
                changes,
            } => {
                assert_eq!(original.lines, vec!["A B".to_string()]);
                assert_eq!(improved.lines, vec!["A C".to_string()]);
                let removed: Vec<&str> = changes
                    .iter()
                    .filter(|s| s.edit == EditType::Delete)
                    .map(|s| s.text.as_str())
                    .collect();
                let added: Vec<&str> = changes
                    .iter()
                    .filter(|s| s.edit == EditType::Insert)
                    .map(|s| s.text.as_str())
                    .collect();
                assert_eq!(removed, vec!["B"]);
                assert_eq!(added, vec!["C"]);
            }
            other => panic!("expected side-by-side, got {other:?}"),
        }
    }

    #[test]
    fn original_mode_renders_the_original_only() {
        let mut view = view();
        view.set_mode(ViewMode::Original);
        match view.render() {
            RenderedView::Single { panel } => {
                assert_eq!(panel.title, "Original Version");
                assert_eq!(panel.lines, vec!["A B".to_string()]);
            }
            other => panic!("expected single panel, got {other:?}"),
        }
    }

    #[test]
    fn download_names_the_improved_variant_with_a_suffix() {
        let view = view();
        let request = view.download_request();
        assert_eq!(request.base_name, "resume_improved");
        assert_eq!(request.content, "A C");
        assert_eq!(request.media_type, MediaType::Pdf);
    }

    #[test]
    fn download_in_original_mode_keeps_the_source_name() {
        let mut view = view();
        view.set_mode(ViewMode::Original);
        let request = view.download_request();
        assert_eq!(request.base_name, "resume");
        assert_eq!(request.content, "A B");
    }

    #[test]
    fn filename_without_extension_is_used_as_is() {
        assert_eq!(filename_stem("resume"), "resume");
        assert_eq!(filename_stem("resume.final.docx"), "resume.final");
        assert_eq!(filename_stem(".hidden"), ".hidden");
    }
}

//! Page records and their validation
//!
//! A [`PageRecord`] describes one generated page. Records are defined as
//! literal tables in [`crate::data`] and never constructed at runtime, so
//! field presence is enforced by the struct itself; validation only has to
//! catch authoring defects the type system cannot, such as empty fields.

use thiserror::Error;

/// A labeled hyperlink shown in a page's Links section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    /// Absolute URLs open in a new tab; site-relative ones do not.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// Everything needed to render one portfolio page.
#[derive(Debug, Clone, Copy)]
pub struct PageRecord {
    /// Output file name, relative to the output directory.
    pub file: &'static str,
    /// Document title for the `<title>` element.
    pub title: &'static str,
    /// Meta description; double quotes are escaped at render time.
    pub description: &'static str,
    /// Breadcrumb label shown after the section link.
    pub crumb: &'static str,
    /// Page heading.
    pub heading: &'static str,
    /// Summary paragraph for the callout box.
    pub summary: &'static str,
    /// Badge markup shown under the summary, trusted as-is.
    pub badges: &'static str,
    pub overview: &'static str,
    pub role: &'static str,
    /// Tool names, rendered in order as list items.
    pub tools: &'static [&'static str],
    /// Outcome statements, rendered in order as list items.
    pub outcomes: &'static [&'static str],
    /// Related links; an empty list renders a placeholder fragment.
    pub links: &'static [Link],
}

/// An ordered group of records sharing navigation context.
#[derive(Debug, Clone, Copy)]
pub struct PageGroup {
    /// Short name used in log and summary lines, e.g. `project`.
    pub name: &'static str,
    /// Breadcrumb root label, e.g. `Projects`.
    pub crumb_label: &'static str,
    /// Breadcrumb root target.
    pub crumb_href: &'static str,
    /// Footer back-link label, e.g. `Back to Projects`.
    pub back_label: &'static str,
    /// Footer back-link target.
    pub back_href: &'static str,
    pub records: &'static [PageRecord],
}

/// Authoring defects in the record tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record `{file}`: field `{field}` is empty")]
    EmptyField {
        file: &'static str,
        field: &'static str,
    },

    #[error("output file `{file}` is named by more than one record")]
    DuplicateFile { file: &'static str },
}

impl PageRecord {
    /// Check that every field the page template substitutes has a value.
    ///
    /// Empty tool/outcome/link lists are allowed (the Links section renders
    /// a placeholder in that case); empty strings inside them are not.
    pub fn validate(&self) -> Result<(), RecordError> {
        let scalars = [
            ("file", self.file),
            ("title", self.title),
            ("description", self.description),
            ("crumb", self.crumb),
            ("heading", self.heading),
            ("summary", self.summary),
            ("badges", self.badges),
            ("overview", self.overview),
            ("role", self.role),
        ];

        for (field, value) in scalars {
            if value.trim().is_empty() {
                return Err(RecordError::EmptyField {
                    file: self.file,
                    field,
                });
            }
        }

        if self.tools.iter().any(|tool| tool.trim().is_empty()) {
            return Err(RecordError::EmptyField {
                file: self.file,
                field: "tools",
            });
        }

        if self.outcomes.iter().any(|outcome| outcome.trim().is_empty()) {
            return Err(RecordError::EmptyField {
                file: self.file,
                field: "outcomes",
            });
        }

        for link in self.links {
            if link.label.trim().is_empty() || link.href.trim().is_empty() {
                return Err(RecordError::EmptyField {
                    file: self.file,
                    field: "links",
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: PageRecord = PageRecord {
        file: "sample.html",
        title: "Sample | Site",
        description: "A sample page.",
        crumb: "Sample",
        heading: "Sample",
        summary: "Summary text.",
        badges: "<span class=\"badge\">Sample</span>",
        overview: "Overview text.",
        role: "Author.",
        tools: &["Unity", "C#"],
        outcomes: &["An outcome"],
        links: &[Link {
            label: "Paper",
            href: "https://example.com/paper",
        }],
    };

    #[test]
    fn test_valid_record_passes() {
        assert_eq!(VALID.validate(), Ok(()));
    }

    #[test]
    fn test_empty_scalar_field_is_reported() {
        let mut record = VALID;
        record.summary = "  ";
        assert_eq!(
            record.validate(),
            Err(RecordError::EmptyField {
                file: "sample.html",
                field: "summary",
            })
        );
    }

    #[test]
    fn test_empty_tool_entry_is_reported() {
        let mut record = VALID;
        record.tools = &["Unity", ""];
        assert_eq!(
            record.validate(),
            Err(RecordError::EmptyField {
                file: "sample.html",
                field: "tools",
            })
        );
    }

    #[test]
    fn test_empty_link_href_is_reported() {
        let mut record = VALID;
        record.links = &[Link {
            label: "Paper",
            href: "",
        }];
        assert_eq!(
            record.validate(),
            Err(RecordError::EmptyField {
                file: "sample.html",
                field: "links",
            })
        );
    }

    #[test]
    fn test_empty_lists_are_allowed() {
        let mut record = VALID;
        record.tools = &[];
        record.outcomes = &[];
        record.links = &[];
        assert_eq!(record.validate(), Ok(()));
    }

    #[test]
    fn test_external_link_detection() {
        let external = Link {
            label: "Paper",
            href: "https://doi.org/10.1000/x",
        };
        let internal = Link {
            label: "Portfolio entry",
            href: "portfolio.html",
        };
        let anchor = Link {
            label: "Demo placeholder",
            href: "#",
        };
        assert!(external.is_external());
        assert!(!internal.is_external());
        assert!(!anchor.is_external());
    }
}

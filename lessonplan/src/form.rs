//! Lesson form configuration from lesson.toml
//!
//! The form carries everything the prompt template needs: school and teacher
//! identity, lesson metadata, the objectives text, and the selector fields
//! that steer the generation service. Selector values serialize as the exact
//! labels the prompt template embeds, so the TOML file reads the way the
//! generated plan will.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// The lesson-plan form, one submission's worth of fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormData {
    /// School name
    pub school_name: String,

    /// Subject department within the school
    pub department: String,

    /// Composing teacher's full name
    pub teacher_name: String,

    /// Subject; the tool targets lower-secondary informatics
    pub subject: String,

    /// Grade (6-9)
    pub grade: String,

    /// Textbook series the class follows
    pub textbook_set: String,

    /// Lesson title; also the source of the output file stem
    pub lesson_title: String,

    /// Learning objectives, one per line, quoted verbatim into the prompt
    pub objectives: String,

    /// Which part of the lesson progression to compose
    pub lesson_phase: LessonPhase,

    /// Regulatory standard the plan must follow
    pub standard: Standard,

    /// Requested export format for the download step
    pub export_format: ExportFormat,
}

/// Part of the lesson progression the service is asked to compose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LessonPhase {
    /// All four activities, start to finish
    #[default]
    #[serde(rename = "Toàn bộ tiến trình")]
    FullProgression,

    /// Opening warm-up activity
    #[serde(rename = "Khởi động")]
    WarmUp,

    /// New knowledge formation
    #[serde(rename = "Hình thành kiến thức mới")]
    KnowledgeFormation,

    /// Guided practice
    #[serde(rename = "Luyện tập")]
    Practice,

    /// Application and extension
    #[serde(rename = "Vận dụng - Mở rộng")]
    Application,

    /// Wrap-up
    #[serde(rename = "Tổng kết")]
    WrapUp,
}

impl LessonPhase {
    /// The label embedded in the prompt template and the TOML file
    pub fn label(self) -> &'static str {
        match self {
            LessonPhase::FullProgression => "Toàn bộ tiến trình",
            LessonPhase::WarmUp => "Khởi động",
            LessonPhase::KnowledgeFormation => "Hình thành kiến thức mới",
            LessonPhase::Practice => "Luyện tập",
            LessonPhase::Application => "Vận dụng - Mở rộng",
            LessonPhase::WrapUp => "Tổng kết",
        }
    }
}

impl fmt::Display for LessonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Regulatory document the plan structure must conform to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Standard {
    /// Official dispatch 5512 on lesson-plan structure
    #[default]
    #[serde(rename = "Công văn 5512/BGDĐT-GDTrH")]
    Dispatch5512,

    /// Circular 32/2018 (general education curriculum)
    #[serde(rename = "Thông tư 32/2018")]
    Circular32,

    /// Circular 22/2021 (assessment)
    #[serde(rename = "Thông tư 22/2021")]
    Circular22,
}

impl Standard {
    /// The label embedded in the prompt template and the TOML file
    pub fn label(self) -> &'static str {
        match self {
            Standard::Dispatch5512 => "Công văn 5512/BGDĐT-GDTrH",
            Standard::Circular32 => "Thông tư 32/2018",
            Standard::Circular22 => "Thông tư 22/2021",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Download format for the exported document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Microsoft Word document built from the parsed block sequence
    #[default]
    #[serde(rename = "Word (.docx)")]
    Docx,

    /// A4 PDF built from a rasterized preview capture
    #[serde(rename = "PDF (.pdf)")]
    Pdf,
}

impl ExportFormat {
    /// File extension for the exported artifact
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            school_name: "Trường THCS Mẫu".to_string(),
            department: "Tổ Khoa học Tự nhiên".to_string(),
            teacher_name: "Nguyễn Văn A".to_string(),
            subject: "Tin học".to_string(),
            grade: "6".to_string(),
            textbook_set: "Cánh Diều".to_string(),
            lesson_title: "Thông tin, thu nhận và xử lý thông tin".to_string(),
            objectives: "Biết thông tin là gì.\n\
                         Biết được thế nào là thu nhận và xử lý thông tin.\n\
                         Phân biệt được thông tin với vật mang tin.\n\
                         Nêu được các ví dụ về thông tin, vật mang tin."
                .to_string(),
            lesson_phase: LessonPhase::default(),
            standard: Standard::default(),
            export_format: ExportFormat::default(),
        }
    }
}

impl FormData {
    /// Load the form from a lesson.toml file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FormConfigError> {
        let content = fs::read_to_string(&path)?;
        let form: FormData = toml::from_str(&content)?;
        Ok(form)
    }

    /// Save the form to a lesson.toml file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FormConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Check the required fields before any service call.
    ///
    /// Grade, lesson title, and objectives must be non-empty; the first
    /// missing field is reported so the message can point at it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.grade.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "grade" });
        }
        if self.lesson_title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "lesson_title",
            });
        }
        if self.objectives.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "objectives",
            });
        }
        Ok(())
    }
}

/// Missing required form input; reported inline, the generation service is
/// never contacted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only
    #[error("required field '{field}' must not be empty")]
    EmptyField {
        /// TOML key of the offending field
        field: &'static str,
    },
}

/// Errors that can occur when loading or saving the lesson form
#[derive(Error, Debug)]
pub enum FormConfigError {
    /// IO error when reading or writing the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Error serializing to TOML
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

//! Prompt composition
//!
//! Renders the lesson form into the fixed prompt template sent to the
//! generation service. Pure string templating: every branch of the plan
//! (which activities to compose, which regulatory structure to follow) is
//! decided by the service from the substituted selector labels, not here.
//! The template also pins down the exact Markdown shape the service must
//! emit, which is what makes the narrow parser in [`crate::markdown`] safe.

use crate::form::FormData;

/// Render the form into the full prompt text. Deterministic; no I/O.
pub fn compose(form: &FormData) -> String {
    format!(
        r#"Hãy soạn một giáo án hoàn chỉnh cho môn Tin học THCS theo mẫu và các thông tin dưới đây. Trình bày toàn bộ bằng tiếng Việt, sử dụng định dạng Markdown.

**THÔNG TIN CƠ BẢN**
- **Trường:** {school}
- **Tổ chuyên môn:** {department}
- **Giáo viên soạn:** {teacher}
- **Môn học:** {subject}
- **Lớp:** {grade}
- **Bộ sách:** {textbook}
- **Tên bài học:** {title}
- **Chuẩn soạn giáo án:** {standard}

---

**YÊU CẦU ĐỊNH DẠNG GIÁO ÁN (RẤT QUAN TRỌNG):**
Hãy tuân thủ nghiêm ngặt cấu trúc và định dạng sau đây.

**PHẦN ĐẦU (HEADER):**
Sử dụng bảng Markdown 2 cột để tạo header:
| Trường THCS {school} <br> Tổ {department} | Họ và tên giáo viên: <br> {teacher} |
| :--- | :--- |

**TÊN BÀI DẠY (TITLE):**
- Căn giữa, IN HOA toàn bộ.
- Định dạng:
# TÊN BÀI DẠY:
# {title_upper}
## Môn học: {subject} | Lớp: {grade}
## Thời gian thực hiện: 1 tiết

---
**NỘI DUNG CHI TIẾT:**
Sử dụng các đề mục La Mã (I, II, III, IV, V) cho các phần chính.

**I. MỤC TIÊU**
(Dựa trên "Yêu cầu cần đạt" người dùng nhập, hãy phân tích và viết chi tiết thành 3 mục nhỏ):
**1. Về kiến thức:**
   - (Gạch đầu dòng các kiến thức học sinh cần nắm)
**2. Về năng lực:**
   - **Năng lực chung:** (Ghi rõ các năng lực chung như tự chủ và tự học, giao tiếp và hợp tác, giải quyết vấn đề và sáng tạo)
   - **Năng lực tin học:** (Ghi rõ các năng lực đặc thù của môn học)
**3. Về phẩm chất:**
   - (Gạch đầu dòng các phẩm chất cần hình thành như chăm chỉ, trách nhiệm, trung thực)

**II. THIẾT BỊ DẠY HỌC VÀ HỌC LIỆU**
**1. Giáo viên:** (Liệt kê các thiết bị, tài liệu tham khảo, phần mềm cần thiết)
**2. Học sinh:** (Liệt kê đồ dùng học tập, SGK, nhiệm vụ cần chuẩn bị trước)

**III. TIẾN TRÌNH DẠY HỌC**
(Tập trung soạn chi tiết phần **"{phase}"** theo yêu cầu của người dùng. Nếu là "Toàn bộ tiến trình", hãy soạn đầy đủ cả 4 hoạt động).

**Mỗi hoạt động phải có cấu trúc:**
### **[TÊN HOẠT ĐỘNG, VÍ DỤ: 1. HOẠT ĐỘNG MỞ ĐẦU (KHỞI ĐỘNG)]**
**a) Mục tiêu:** (Nêu rõ mục tiêu của hoạt động)
**b) Nội dung:** (Mô tả nội dung chính, câu hỏi, bài tập...)
**c) Sản phẩm:** (Mô tả sản phẩm học tập học sinh cần hoàn thành)
**d) Tổ chức thực hiện:**
(Phần này trình bày dưới dạng bảng Markdown 2 cột như sau. Sử dụng thẻ <br> để xuống dòng trong một ô. In đậm các đề mục nhỏ).

| Hoạt động của GV và HS | Nội dung/Sản phẩm dự kiến |
| :--- | :--- |
| **1. Giao nhiệm vụ học tập** <br> (Mô tả hoạt động của GV: nêu câu hỏi, yêu cầu...) | **Gợi ý đáp án / Kiến thức cần nhớ:** <br> (Trình bày nội dung, đáp án, hoặc kiến thức cốt lõi tương ứng với hoạt động của GV) |
| **2. Thực hiện nhiệm vụ** <br> (Mô tả hoạt động của HS: suy nghĩ, thảo luận, làm bài...) | (Kết quả làm việc, thảo luận của HS) |
| **3. Báo cáo, thảo luận** <br> (Mô tả hoạt động của GV và HS: mời HS trình bày, nhận xét...) | (Phần trình bày của HS, nhận xét của các bạn và GV) |
| **4. Kết luận, nhận định** <br> (Mô tả hoạt động của GV: chốt lại kiến thức, chuyển giao nhiệm vụ mới...) | (Kiến thức trọng tâm được rút ra) |

**IV. HƯỚNG DẪN HỌC SINH TỰ HỌC**
**a) Hướng dẫn học bài cũ:**
**b) Hướng dẫn chuẩn bị bài mới:**

**V. RÚT KINH NGHIỆM**
(Để trống phần này).

---
**ĐẦU VÀO CỦA NGƯỜI DÙNG:**
- **Yêu cầu cần đạt / Mục tiêu bài học:**
  ```
  {objectives}
  ```
"#,
        school = form.school_name,
        department = form.department,
        teacher = form.teacher_name,
        subject = form.subject,
        grade = form.grade,
        textbook = form.textbook_set,
        title = form.lesson_title,
        title_upper = form.lesson_title.to_uppercase(),
        standard = form.standard,
        phase = form.lesson_phase,
        objectives = form.objectives,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{LessonPhase, Standard};

    #[test]
    fn test_compose_embeds_every_form_field() {
        // Arrange
        let form = FormData::default();

        // Act
        let prompt = compose(&form);

        // Assert: each field lands in its template position
        assert!(prompt.contains("- **Trường:** Trường THCS Mẫu"));
        assert!(prompt.contains("- **Tổ chuyên môn:** Tổ Khoa học Tự nhiên"));
        assert!(prompt.contains("- **Giáo viên soạn:** Nguyễn Văn A"));
        assert!(prompt.contains("- **Môn học:** Tin học"));
        assert!(prompt.contains("- **Lớp:** 6"));
        assert!(prompt.contains("- **Bộ sách:** Cánh Diều"));
        assert!(prompt.contains("Biết thông tin là gì."));
    }

    #[test]
    fn test_compose_uppercases_the_title_block() {
        let mut form = FormData::default();
        form.lesson_title = "Thông tin và dữ liệu".to_string();

        let prompt = compose(&form);

        assert!(prompt.contains("# THÔNG TIN VÀ DỮ LIỆU"));
        // The basic-info line keeps the original casing
        assert!(prompt.contains("- **Tên bài học:** Thông tin và dữ liệu"));
    }

    #[test]
    fn test_compose_substitutes_selector_labels() {
        let mut form = FormData::default();
        form.lesson_phase = LessonPhase::WarmUp;
        form.standard = Standard::Circular22;

        let prompt = compose(&form);

        assert!(prompt.contains("(Tập trung soạn chi tiết phần **\"Khởi động\"**"));
        assert!(prompt.contains("- **Chuẩn soạn giáo án:** Thông tư 22/2021"));
    }

    #[test]
    fn test_compose_quotes_objectives_verbatim() {
        let mut form = FormData::default();
        form.objectives = "Mục tiêu A.\nMục tiêu B.".to_string();

        let prompt = compose(&form);

        assert!(prompt.contains("```\n  Mục tiêu A.\nMục tiêu B.\n  ```"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let form = FormData::default();

        assert_eq!(compose(&form), compose(&form));
    }
}

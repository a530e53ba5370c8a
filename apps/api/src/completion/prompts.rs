//! Fixed prompt text for the resume improvement pass.

pub const IMPROVE_SYSTEM: &str = "You are a professional resume writer and career coach. \
Your task is to improve resumes by making them more impactful, professional, and \
ATS-friendly while maintaining the original meaning and facts.";

/// Builds the user turn carrying the extracted resume text.
pub fn improve_request(content: &str) -> String {
    format!(
        "Please improve the following resume content. Focus on:\n\
         1. Making achievements more quantifiable and impactful\n\
         2. Using strong action verbs\n\
         3. Improving clarity and conciseness\n\
         4. Ensuring ATS compatibility\n\
         5. Maintaining professional tone\n\
         \n\
         Here's the content to improve:\n{content}"
    )
}

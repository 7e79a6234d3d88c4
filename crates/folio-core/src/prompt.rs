//! Prompt assembly for portfolio review requests.

/// Build the reviewer prompt sent to the model.
///
/// The prompt pins the reviewer persona to the requested portfolio kind,
/// embeds the fetched content snippet, steers the focus areas depending
/// on whether the URL is a GitHub repository, and fixes the four-section
/// Markdown shape of the answer.
pub fn build_review_prompt(url: &str, content: &str, kind: &str, is_github: bool) -> String {
    let mut prompt = format!(
        "You are an expert AI Portfolio Reviewer specializing in **{kind}** portfolios.\n\
         Analyze the content extracted from the URL: {url}.\n\n"
    );

    prompt.push_str(&format!(
        "The content snippet is provided below:\n---\n{content}\n---\n\n"
    ));

    if is_github {
        prompt.push_str(
            "Given this is a **GitHub repository**, prioritize your analysis on:\n\
             1. **README Quality:** Is the project's purpose, installation, and usage clear?\n\
             2. **Repository Structure:** Are files logically organized? Is the dependency file clear?\n\
             3. **Code Style & Documentation:** (Infer from the structure) Is the assumed code professional and well-commented?\n\n",
        );
    } else {
        prompt.push_str(
            "Given this is a standard **Web Portfolio**, prioritize your analysis on:\n\
             1. **Visual Hierarchy & Navigation:** Is it easy to find key information (skills, contact, projects)?\n\
             2. **Responsiveness:** Is the design likely to work well on different screen sizes?\n\
             3. **Personal Branding:** Does the voice and design align with the user's stated career goals?\n\n",
        );
    }

    prompt.push_str(&format!(
        "Provide constructive feedback in four key sections using clear Markdown formatting (H3 headers, **bold**, and bullet points):\n\n\
         ### 1. Overall Impression & Fit for Role\n\
         Assess the immediate impact and how well the portfolio aligns with a **{kind}** role.\n\n\
         ### 2. Technical Depth & Proof\n\
         Comment on how effectively projects showcase technical skills, methodologies, and problem-solving abilities relevant to **{kind}**.\n\n\
         ### 3. Presentation & User Experience (or Code Structure for GitHub)\n\
         Review the visual design (if website) OR the repository structure/README quality (if GitHub).\n\n\
         ### 4. Top 3 Actionable Next Steps\n\
         Provide 3 specific, high-impact steps the user can take *today* to enhance this portfolio.\n"
    ));

    prompt
}

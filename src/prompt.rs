/// Render the single instruction string sent to the model.
///
/// The extracted text and the keywords are embedded verbatim, with no
/// escaping or sanitization.
pub fn build_prompt(extracted_text: &str, keywords: &str, variant_count: u32) -> String {
    let count = variant_count.to_string();
    let mut prompt = String::with_capacity(extracted_text.len() + keywords.len() + 700);

    prompt.push_str("## Meta Title & Description Generator\n\n");
    prompt.push_str(
        "You are an assistant that writes SEO-optimized meta titles and descriptions. \
         Analyze the webpage content provided below first.\n\n",
    );
    prompt.push_str("Rules:\n");
    prompt.push_str("- Each meta title is 50-60 characters and includes at least 1 keyword.\n");
    prompt.push_str("- Each meta description is 150-160 characters and includes 2-3 keywords.\n\n");
    prompt.push_str("Generate exactly ");
    prompt.push_str(&count);
    prompt.push_str(" unique variants.\n\n");
    prompt.push_str("Return ONLY a JSON array, with no surrounding prose:\n");
    prompt.push_str(
        "[\n  { \"title\": \"Example Title 1\", \"description\": \"Example Description 1\" },\n  \
         { \"title\": \"Example Title 2\", \"description\": \"Example Description 2\" }\n]\n\n",
    );
    prompt.push_str("Webpage content:\n");
    prompt.push_str(extracted_text);
    prompt.push_str("\n\nTarget keywords: ");
    prompt.push_str(keywords);

    prompt
}

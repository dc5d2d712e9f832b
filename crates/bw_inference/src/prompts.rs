use bw_core::{Article, ResearchBundle, Result};

/// Upper bound on article content embedded in a summary prompt, in characters.
pub const MAX_CONTENT_CHARS: usize = 8000;

pub const SUMMARIZER_SYSTEM: &str = "You are a factual research summarizer. Extract key information and return structured JSON. Be precise and do NOT hallucinate.";

pub const WRITER_SYSTEM: &str = "You are an expert technical writer specializing in AI/ML/Data Science. Write comprehensive, well-researched blog posts with proper citations. Target audience: data scientists, ML engineers, technical hiring managers. Style: professional, factual, engaging, accessible.";

/// Section headings the composed post must contain, in order.
pub const REQUIRED_SECTIONS: [&str; 9] = [
    "## 🎯 TL;DR",
    "## 📖 Introduction",
    "## 🔍 Background",
    "## 🚀 Recent Developments",
    "## 🏢 Industry Applications",
    "## 💡 Practical Implications",
    "## 📊 Code Example",
    "## 🔮 Future Outlook",
    "## 📚 References",
];

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_summary_prompt(article: &Article) -> String {
    let content = truncate_chars(&article.content, MAX_CONTENT_CHARS);
    format!(r#"Summarize this article:

Title: {title}
URL: {url}
Date: {date}

Content:
{content}

Return ONLY valid JSON with this exact structure:
{{
  "title": "string",
  "summary": "3-sentence summary",
  "keyFacts": ["fact1", "fact2", "fact3"],
  "quotes": [{{"text": "quote", "context": "context"}}],
  "source": "source name",
  "url": "{url}",
  "date": "ISO date",
  "reliability": 8
}}

"reliability" is an integer from 0 (untrustworthy) to 10 (primary source)."#,
        title = article.title,
        url = article.url,
        date = article.date,
        content = content,
    )
}

pub fn build_composition_prompt(bundle: &ResearchBundle) -> Result<String> {
    let bundle_json = serde_json::to_string_pretty(bundle)?;
    let tags_json = serde_json::to_string(&bundle.tags)?;
    let sections = REQUIRED_SECTIONS
        .iter()
        .zip(SECTION_NOTES)
        .map(|(heading, note)| format!("- {} ({})", heading, note))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(r#"Create a comprehensive blog post using this research bundle:

{bundle_json}

REQUIREMENTS:

1. YAML FRONTMATTER (first lines):
---
title: "Compelling Title (60-70 chars)"
date: {date}
author: "AI Research Assistant"
tags: {tags_json}
summary: "One compelling sentence (150-160 chars for SEO)"
ai_generated: true
human_reviewed: false
---

2. STRUCTURE (all nine sections, in this order):
{sections}

3. CITATION RULES:
- Use [1], [2] inline after factual claims
- Each of the {total} sources must be cited at least once
- References section: [1] Title - Source Name (Date) - URL

4. STYLE:
- Use emojis for section headers only
- Write in active voice
- Use short paragraphs (3-4 sentences max)
- Technical but accessible
- 1200-1800 words total

5. TRANSPARENCY:
- Mention "This post aggregates recent AI research" in the introduction
- Link to original sources

Generate the COMPLETE Markdown blog post now (including frontmatter)."#,
        bundle_json = bundle_json,
        date = bundle.generated_date.to_rfc3339(),
        tags_json = tags_json,
        sections = sections,
        total = bundle.total_sources,
    ))
}

const SECTION_NOTES: [&str; 9] = [
    "3-4 bullet points",
    "2-3 paragraphs, set context",
    "explain fundamentals",
    "one H3 section per major finding",
    "real company examples",
    "for data scientists/engineers",
    "if applicable, simple Python/pseudocode",
    "brief, grounded in sources",
    "numbered list with full URLs",
];

use bw_core::BlogPost;

const MIN_WORDS: usize = 1000;
const MIN_CITATIONS: usize = 3;

/// Advisory checks run on a composed post before it is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    pub word_count: usize,
    pub citation_count: usize,
    pub has_references: bool,
    pub has_tldr: bool,
    pub has_code_example: bool,
    pub issues: Vec<String>,
}

impl QualityReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn check(post: &BlogPost) -> QualityReport {
    let text = post.as_str();
    let word_count = post.word_count();
    let citation_count = post.citation_count();
    let has_references = text.contains("## 📚 References") || text.contains("## References");
    let has_tldr = text.contains("TL;DR");
    let has_code_example = text.contains("```");

    let mut issues = Vec::new();
    if !has_references {
        issues.push("Missing references section".to_string());
    }
    if !has_tldr {
        issues.push("Missing TL;DR".to_string());
    }
    if word_count < MIN_WORDS {
        issues.push(format!("Word count too low: {}", word_count));
    }
    if citation_count < MIN_CITATIONS {
        issues.push(format!("Too few citations: {}", citation_count));
    }

    QualityReport {
        word_count,
        citation_count,
        has_references,
        has_tldr,
        has_code_example,
        issues,
    }
}

//! Sentiment classification prompt and the closed label set it asks the model to choose from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ai::error::{invalid_argument, invalid_response, AiError, AiResult};

/// One of the labels the classification prompt allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Disappointed,
    Satisfied,
    Thrilled,
    Angry,
    Content,
    Delighted,
    Underwhelmed,
    Frustrated,
    Happy,
    Impressed,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 10] = [
        SentimentLabel::Disappointed,
        SentimentLabel::Satisfied,
        SentimentLabel::Thrilled,
        SentimentLabel::Angry,
        SentimentLabel::Content,
        SentimentLabel::Delighted,
        SentimentLabel::Underwhelmed,
        SentimentLabel::Frustrated,
        SentimentLabel::Happy,
        SentimentLabel::Impressed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Disappointed => "disappointed",
            SentimentLabel::Satisfied => "satisfied",
            SentimentLabel::Thrilled => "thrilled",
            SentimentLabel::Angry => "angry",
            SentimentLabel::Content => "content",
            SentimentLabel::Delighted => "delighted",
            SentimentLabel::Underwhelmed => "underwhelmed",
            SentimentLabel::Frustrated => "frustrated",
            SentimentLabel::Happy => "happy",
            SentimentLabel::Impressed => "impressed",
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        SentimentLabel::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = AiError;

    /// Case-insensitive; ignores surrounding whitespace, quotes and trailing punctuation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().trim_matches(|c: char| !c.is_alphanumeric());
        SentimentLabel::from_word(word)
            .ok_or_else(|| invalid_argument(format!("Unknown sentiment label '{}'", s.trim())))
    }
}

/// Instruction prefix for sentiment classification calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentimentPrompt {
    prompt: String,
}

impl SentimentPrompt {
    pub fn new<S: Into<String>>(prompt: S) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.prompt
    }

    /// Concatenates the prompt and the caller text, without a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ai_pipeline_config::ai::SentimentPrompt;
    ///
    /// let prompt = SentimentPrompt::new("Classify. Text:");
    /// assert_eq!(prompt.build(" It broke on day two."), "Classify. Text: It broke on day two.");
    /// ```
    pub fn build(&self, text: &str) -> String {
        let mut request = String::with_capacity(self.prompt.len() + text.len());
        request.push_str(&self.prompt);
        request.push_str(text);
        request
    }

    /// Labels the prompt offers, in the order they appear, without duplicates.
    ///
    /// The labels are read from the longest list of label words in the prompt, where list items
    /// are separated by commas, `or` and `and`. A list ends at any other word or at the end of a
    /// clause. Label words used elsewhere in the instruction ("classify the content below") are
    /// therefore not offered.
    pub fn labels(&self) -> Vec<SentimentLabel> {
        let mut best: Vec<SentimentLabel> = Vec::new();
        let mut run: Vec<SentimentLabel> = Vec::new();
        for token in self
            .prompt
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            let word = token.trim_matches(|c: char| !c.is_alphabetic());
            match SentimentLabel::from_word(word) {
                Some(label) => {
                    if !run.contains(&label) {
                        run.push(label);
                    }
                }
                None if is_list_connector(word) => {}
                None => close_run(&mut run, &mut best),
            }
            if token.ends_with(|c: char| matches!(c, '.' | ':' | ';' | '!' | '?')) {
                close_run(&mut run, &mut best);
            }
        }
        close_run(&mut run, &mut best);
        best
    }

    /// Maps a model reply onto one of the prompt's labels.
    ///
    /// The reply must be a single label, optionally wrapped in quotes or followed by
    /// punctuation, and optionally preceded by a one-word heading such as `Sentiment:`.
    /// Anything longer ("not happy", "happy or frustrated") is rejected rather than guessed at,
    /// as is a label the prompt does not offer.
    pub fn parse_response(&self, output: &str) -> AiResult<SentimentLabel> {
        let reply = output.trim();
        let answer = match reply.split_once(':') {
            Some((heading, rest)) if is_heading(heading) => rest,
            _ => reply,
        };
        let word = answer.trim().trim_matches(|c: char| !c.is_alphanumeric());
        let label = SentimentLabel::from_word(word).ok_or_else(|| {
            invalid_response(format!("Model reply '{reply}' is not a single sentiment label"))
        })?;
        if !self.labels().contains(&label) {
            return Err(invalid_response(format!(
                "Model reply '{reply}' names '{label}', which the prompt does not offer"
            )));
        }
        Ok(label)
    }
}

impl fmt::Display for SentimentPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prompt)
    }
}

fn is_list_connector(word: &str) -> bool {
    word.eq_ignore_ascii_case("or") || word.eq_ignore_ascii_case("and")
}

fn is_heading(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

fn close_run(run: &mut Vec<SentimentLabel>, best: &mut Vec<SentimentLabel>) {
    if !run.is_empty() && run.len() >= best.len() {
        *best = std::mem::take(run);
    } else {
        run.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::error::AiErrorCode;
    use crate::config::SENTIMENT_ANALYSIS_PROMPT;

    fn prompt() -> SentimentPrompt {
        SentimentPrompt::new(SENTIMENT_ANALYSIS_PROMPT)
    }

    #[test]
    fn default_prompt_names_all_labels_in_order() {
        assert_eq!(prompt().labels(), SentimentLabel::ALL);
    }

    #[test]
    fn build_appends_text_verbatim() {
        let request = prompt().build("The battery lasts forever.");
        assert!(request.starts_with(SENTIMENT_ANALYSIS_PROMPT));
        assert!(request.ends_with("Text:The battery lasts forever."));
    }

    #[test]
    fn parse_response_accepts_decorated_replies() {
        let prompt = prompt();
        assert_eq!(prompt.parse_response("Thrilled").unwrap(), SentimentLabel::Thrilled);
        assert_eq!(prompt.parse_response("  \"angry\".\n").unwrap(), SentimentLabel::Angry);
        assert_eq!(
            prompt.parse_response("Sentiment: underwhelmed").unwrap(),
            SentimentLabel::Underwhelmed
        );
    }

    #[test]
    fn parse_response_rejects_unknown_or_ambiguous_replies() {
        let prompt = prompt();
        let err = prompt.parse_response("neutral").unwrap_err();
        assert_eq!(err.code, AiErrorCode::InvalidResponse);

        let err = prompt.parse_response("happy or frustrated").unwrap_err();
        assert!(err.message().contains("not a single sentiment label"));
    }

    #[test]
    fn parse_response_rejects_negated_labels() {
        let prompt = prompt();
        for reply in ["Not happy", "not impressed.", "Sentiment: never satisfied", "I'm not angry"] {
            let err = prompt.parse_response(reply).unwrap_err();
            assert_eq!(err.code, AiErrorCode::InvalidResponse, "reply {reply:?}");
        }
    }

    #[test]
    fn parse_response_only_accepts_labels_from_the_prompt() {
        let narrow = SentimentPrompt::new("Answer happy or angry. Text:");
        assert_eq!(narrow.labels(), [SentimentLabel::Happy, SentimentLabel::Angry]);
        let err = narrow.parse_response("delighted").unwrap_err();
        assert!(err.message().contains("does not offer"));
    }

    #[test]
    fn labels_ignore_label_words_outside_the_list() {
        let custom = SentimentPrompt::new("Classify the content below as happy or angry. Text:");
        assert_eq!(custom.labels(), [SentimentLabel::Happy, SentimentLabel::Angry]);
        assert!(custom.parse_response("content").is_err());

        let trailing = SentimentPrompt::new("Pick one of: thrilled, frustrated. Content follows. Text:");
        assert_eq!(trailing.labels(), [SentimentLabel::Thrilled, SentimentLabel::Frustrated]);
    }

    #[test]
    fn label_parsing_ignores_case_and_punctuation() {
        assert_eq!("Impressed!".parse::<SentimentLabel>().unwrap(), SentimentLabel::Impressed);
        assert!("meh".parse::<SentimentLabel>().is_err());
    }
}

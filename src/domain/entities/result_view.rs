pub const NO_MATCH_TEXT: &str = "No matching entry.";
pub const REMARK_HEADING: &str = "Remark :";

/// How a remark is shown once split into fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemarkDisplay {
    /// Nothing survived splitting; the trimmed text is shown as-is, without a heading.
    Plain(String),
    /// A "Remark :" block with one line per fragment.
    Block(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Remark(RemarkDisplay),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub number: usize,
    pub fields: Vec<Field>,
}

/// What the result area shows after "Show".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    NoMatch,
    Matches {
        header: Vec<Field>,
        cards: Vec<ResultCard>,
    },
}

impl Field {
    fn push_lines(&self, lines: &mut Vec<String>) {
        match &self.value {
            FieldValue::Text(text) => lines.push(format!("{} : {}", self.label, text)),
            FieldValue::Remark(RemarkDisplay::Plain(text)) => lines.push(text.clone()),
            FieldValue::Remark(RemarkDisplay::Block(fragments)) => {
                lines.push(REMARK_HEADING.to_string());
                lines.extend(fragments.iter().cloned());
            }
        }
    }
}

impl ResultCard {
    pub fn badge(&self) -> String {
        format!("#{}", self.number)
    }
}

impl ResultView {
    pub fn card_count(&self) -> usize {
        match self {
            ResultView::NoMatch => 0,
            ResultView::Matches { cards, .. } => cards.len(),
        }
    }

    /// The text a reader sees in the result area, one rendered line per line.
    pub fn to_plain_text(&self) -> String {
        let (header, cards) = match self {
            ResultView::NoMatch => return NO_MATCH_TEXT.to_string(),
            ResultView::Matches { header, cards } => (header, cards),
        };

        let mut lines = Vec::new();
        for field in header {
            field.push_lines(&mut lines);
        }
        for card in cards {
            lines.push(card.badge());
            for field in &card.fields {
                field.push_lines(&mut lines);
            }
        }
        lines.join("\n")
    }
}

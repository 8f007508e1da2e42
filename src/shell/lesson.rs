//! Lesson decks: flash cards and the built-in starter set

use serde::Deserialize;

/// A single flash card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    /// Word or sentence being learned
    pub word: String,
    /// Meaning in the other language
    pub translation: String,
    #[serde(default)]
    pub pinyin: Option<String>,
}

impl Card {
    pub fn new(word: &str, translation: &str, pinyin: Option<&str>) -> Self {
        Self {
            word: word.to_string(),
            translation: translation.to_string(),
            pinyin: pinyin.map(str::to_string),
        }
    }

    /// Text handed to speech output when the card is tapped
    pub fn spoken_text(&self) -> &str {
        &self.word
    }
}

/// An ordered deck of cards with a cursor
#[derive(Debug, Clone, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub cards: Vec<Card>,
    #[serde(skip)]
    position: usize,
}

impl Lesson {
    pub fn new(title: &str, cards: Vec<Card>) -> Self {
        Self {
            title: title.to_string(),
            cards,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.position)
    }

    /// Move to the next card. Returns false at the end of the deck.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.cards.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous card. Returns false at the start of the deck.
    pub fn retreat(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Fraction of the deck reached, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        match self.cards.len() {
            0 => 0.0,
            n => (self.position + 1) as f64 / n as f64,
        }
    }
}

/// Starter lessons used when the config file has none
pub fn builtin_lessons() -> Vec<Lesson> {
    vec![
        Lesson::new(
            "English Words",
            vec![
                Card::new("apple", "苹果", Some("píng guǒ")),
                Card::new("cat", "猫", Some("māo")),
                Card::new("dog", "狗", Some("gǒu")),
                Card::new("sun", "太阳", Some("tài yáng")),
                Card::new("water", "水", Some("shuǐ")),
            ],
        ),
        Lesson::new(
            "普通话单词",
            vec![
                Card::new("你好", "hello", Some("nǐ hǎo")),
                Card::new("谢谢", "thank you", Some("xiè xie")),
                Card::new("朋友", "friend", Some("péng you")),
                Card::new("妈妈", "mother", Some("mā ma")),
            ],
        ),
        Lesson::new(
            "English Sentences",
            vec![
                Card::new("How are you?", "你好吗？", Some("nǐ hǎo ma")),
                Card::new("I like apples.", "我喜欢苹果。", Some("wǒ xǐ huān píng guǒ")),
                Card::new("Good night!", "晚安！", Some("wǎn ān")),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Lesson {
        let cards = (0..n).map(|i| Card::new(&format!("w{i}"), "t", None)).collect();
        Lesson::new("test", cards)
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut lesson = deck(2);
        assert!(lesson.advance());
        assert!(!lesson.advance());
        assert_eq!(lesson.position(), 1);
    }

    #[test]
    fn test_retreat_stops_at_start() {
        let mut lesson = deck(3);
        assert!(!lesson.retreat());
        lesson.advance();
        assert!(lesson.retreat());
        assert_eq!(lesson.position(), 0);
    }

    #[test]
    fn test_empty_deck() {
        let mut lesson = deck(0);
        assert!(lesson.current().is_none());
        assert!(!lesson.advance());
        assert_eq!(lesson.progress(), 0.0);
    }

    #[test]
    fn test_progress() {
        let mut lesson = deck(4);
        assert!((lesson.progress() - 0.25).abs() < 1e-9);
        lesson.advance();
        lesson.advance();
        lesson.advance();
        assert!((lesson.progress() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_builtin_lessons_not_empty() {
        let lessons = builtin_lessons();
        assert!(!lessons.is_empty());
        assert!(lessons.iter().all(|l| !l.cards.is_empty()));
    }
}

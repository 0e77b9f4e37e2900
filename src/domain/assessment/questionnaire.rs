//! Static questionnaire definition.
//!
//! The Namayush questionnaire: three sections of three multiple-choice
//! questions each, every choice tagged with the dosha it counts toward.
//! Defined once at process start; never mutated.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::foundation::Dosha;

use super::answers::Answer;

/// One selectable choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub dosha: Dosha,
    pub weight: u32,
}

impl Choice {
    /// Creates a choice with the default weight of 1.
    pub const fn new(value: &'static str, label: &'static str, dosha: Dosha) -> Self {
        Self {
            value,
            label,
            dosha,
            weight: 1,
        }
    }

    /// Creates a choice with an explicit weight.
    pub const fn weighted(
        value: &'static str,
        label: &'static str,
        dosha: Dosha,
        weight: u32,
    ) -> Self {
        Self {
            value,
            label,
            dosha,
            weight,
        }
    }

    /// Converts this choice into the answer recorded when a user picks it.
    pub fn to_answer(&self) -> Answer {
        Answer::new(self.value, self.dosha, self.weight)
    }
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub choices: Vec<Choice>,
}

impl Question {
    /// Finds a choice by its value.
    pub fn choice(&self, value: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.value == value)
    }
}

/// A titled group of questions, presented as one questionnaire step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub questions: Vec<Question>,
}

/// The full questionnaire: sections in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    pub sections: Vec<Section>,
}

impl Questionnaire {
    /// Iterates over all questions across sections.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }

    /// Finds a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|q| q.id == id)
    }

    /// Total number of questions.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// True if the questionnaire has no questions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every question has an entry in the answer set.
    pub fn is_complete(&self, answers: &super::AnswerSet) -> bool {
        self.questions().all(|q| answers.contains(q.id))
    }
}

fn question(id: &'static str, prompt: &'static str, choices: [Choice; 3]) -> Question {
    Question {
        id,
        prompt,
        choices: choices.to_vec(),
    }
}

/// The static questionnaire definition.
pub static QUESTIONNAIRE: Lazy<Questionnaire> = Lazy::new(|| Questionnaire {
    sections: vec![
        Section {
            title: "Physical Characteristics",
            questions: vec![
                question(
                    "q1",
                    "What is your body frame?",
                    [
                        Choice::new("thin", "Thin, light frame", Dosha::Vata),
                        Choice::new("medium", "Medium, muscular frame", Dosha::Pitta),
                        Choice::new("large", "Large, heavy frame", Dosha::Kapha),
                    ],
                ),
                question(
                    "q2",
                    "How is your skin texture?",
                    [
                        Choice::new("dry", "Dry, rough, cool", Dosha::Vata),
                        Choice::new("warm", "Warm, oily, sensitive", Dosha::Pitta),
                        Choice::new("thick", "Thick, smooth, oily", Dosha::Kapha),
                    ],
                ),
                question(
                    "q3",
                    "How is your appetite?",
                    [
                        Choice::new("irregular", "Irregular, skips meals", Dosha::Vata),
                        Choice::new("strong", "Strong, cannot skip meals", Dosha::Pitta),
                        Choice::new("steady", "Steady, can skip meals easily", Dosha::Kapha),
                    ],
                ),
            ],
        },
        Section {
            title: "Mental & Emotional Traits",
            questions: vec![
                question(
                    "q4",
                    "How would you describe your memory?",
                    [
                        Choice::new("quick", "Quick to learn, quick to forget", Dosha::Vata),
                        Choice::new("sharp", "Sharp, clear memory", Dosha::Pitta),
                        Choice::new("slow", "Slow to learn, long retention", Dosha::Kapha),
                    ],
                ),
                question(
                    "q5",
                    "How do you handle stress?",
                    [
                        Choice::new("anxious", "Anxious, worried", Dosha::Vata),
                        Choice::new("irritable", "Irritable, aggressive", Dosha::Pitta),
                        Choice::new("calm", "Calm, withdrawn", Dosha::Kapha),
                    ],
                ),
                question(
                    "q6",
                    "What is your sleep pattern?",
                    [
                        Choice::new("light", "Light, interrupted sleep", Dosha::Vata),
                        Choice::new("moderate", "Moderate, sound sleep", Dosha::Pitta),
                        Choice::new("deep", "Deep, prolonged sleep", Dosha::Kapha),
                    ],
                ),
            ],
        },
        Section {
            title: "Digestive & Energy Patterns",
            questions: vec![
                question(
                    "q7",
                    "How is your digestion?",
                    [
                        Choice::new("variable", "Variable, gas, bloating", Dosha::Vata),
                        Choice::new("strong", "Strong, acidic, heartburn", Dosha::Pitta),
                        Choice::new("slow", "Slow, heavy feeling", Dosha::Kapha),
                    ],
                ),
                question(
                    "q8",
                    "What is your energy level throughout the day?",
                    [
                        Choice::new("bursts", "Bursts of energy, then fatigue", Dosha::Vata),
                        Choice::new("high", "High, sustained energy", Dosha::Pitta),
                        Choice::new("steady", "Steady, slow to start", Dosha::Kapha),
                    ],
                ),
                question(
                    "q9",
                    "How do you prefer temperature?",
                    [
                        Choice::new("warm", "Prefer warm climate", Dosha::Vata),
                        Choice::new("cool", "Prefer cool climate", Dosha::Pitta),
                        Choice::new("moderate", "Adapt well to all climates", Dosha::Kapha),
                    ],
                ),
            ],
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AnswerSet;

    #[test]
    fn questionnaire_has_three_sections_of_three() {
        assert_eq!(QUESTIONNAIRE.sections.len(), 3);
        for section in &QUESTIONNAIRE.sections {
            assert_eq!(section.questions.len(), 3);
        }
        assert_eq!(QUESTIONNAIRE.len(), 9);
        assert!(!QUESTIONNAIRE.is_empty());
    }

    #[test]
    fn every_question_offers_each_dosha_once() {
        for q in QUESTIONNAIRE.questions() {
            for dosha in Dosha::all() {
                assert_eq!(
                    q.choices.iter().filter(|c| c.dosha == *dosha).count(),
                    1,
                    "question {} must have exactly one {} choice",
                    q.id,
                    dosha
                );
            }
        }
    }

    #[test]
    fn question_ids_are_unique() {
        let mut ids: Vec<_> = QUESTIONNAIRE.questions().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn question_lookup_by_id() {
        let q1 = QUESTIONNAIRE.question("q1").unwrap();
        assert_eq!(q1.prompt, "What is your body frame?");
        assert!(QUESTIONNAIRE.question("q99").is_none());
    }

    #[test]
    fn choice_lookup_by_value() {
        let q1 = QUESTIONNAIRE.question("q1").unwrap();
        let choice = q1.choice("thin").unwrap();
        assert_eq!(choice.dosha, Dosha::Vata);
        assert_eq!(choice.weight, 1);
        assert!(q1.choice("gigantic").is_none());
    }

    #[test]
    fn choice_converts_to_answer() {
        let answer = Choice::weighted("thin", "Thin, light frame", Dosha::Vata, 2).to_answer();
        assert_eq!(answer.value, "thin");
        assert_eq!(answer.dosha, Dosha::Vata);
        assert_eq!(answer.weight, 2);
    }

    #[test]
    fn is_complete_requires_all_questions() {
        let mut answers = AnswerSet::new();
        assert!(!QUESTIONNAIRE.is_complete(&answers));

        for q in QUESTIONNAIRE.questions() {
            answers.record(q.id, q.choices[0].to_answer());
        }
        assert!(QUESTIONNAIRE.is_complete(&answers));
    }
}

use crate::industry::IndustryRecord;
use crate::quiz::format::{format_thousands, format_truncated};
use crate::quiz::{Question, RangeSource};

const QUESTION_SUFFIX: &str = " industry?";
const DISTRACTOR_COUNT: usize = 3;
// Distractors for the sector question are bare numbers below this bound
const SECTOR_DISTRACTOR_BOUND: u64 = 80;
const PRODUCTIVITY_DISTRACTOR_BOUND: u64 = 3000;
pub const TRUE_FALSE_CHOICES: [&str; 2] = ["True", "False"];

/// Turns industry rows into quiz questions, ten per row.
pub struct QuestionGenerator<S: RangeSource> {
    source: S,
    legacy_true_false: bool,
}

impl<S: RangeSource> QuestionGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            legacy_true_false: false,
        }
    }

    /// Always key true/false statements as "True", even when the stated code is wrong.
    /// Older question banks were generated that way.
    pub fn with_legacy_true_false(mut self, legacy: bool) -> Self {
        self.legacy_true_false = legacy;
        self
    }

    pub fn generate(&mut self, records: &[IndustryRecord]) -> Vec<Question> {
        let mut questions = Vec::with_capacity(records.len() * 10);
        for record in records {
            questions.extend(self.questions_for(record));
        }
        log::info!(
            "Generated {} questions for {} industries",
            questions.len(),
            records.len()
        );
        questions
    }

    pub fn questions_for(&mut self, raw: &IndustryRecord) -> Vec<Question> {
        log::debug!("Generating questions for {}", raw.industry_name);
        let name = &raw.industry_name;
        let sector = &raw.sector;
        return vec![
            self.count_question(
                sector,
                prompt("How many companies are in the", name),
                raw.companies,
            ),
            self.count_question(
                sector,
                prompt("How many establishments are in the", name),
                raw.establishments,
            ),
            self.count_question(
                sector,
                prompt("How many employees are in the", name),
                raw.employees,
            ),
            self.amount_question(sector, prompt("What is the revenue for the", name), raw.revenue),
            self.amount_question(sector, prompt("What is the payroll for the", name), raw.payroll),
            self.productivity_question(
                sector,
                prompt("What is the productivity for the", name),
                &raw.productivity,
            ),
            self.count_question(
                sector,
                prompt("What is the average salary for the", name),
                raw.average_salary,
            ),
            self.amount_question(
                sector,
                prompt("What is the average hourly rate for the", name),
                raw.average_hr_rate,
            ),
            self.sector_question(sector, prompt("What is the sector for the", name)),
            self.true_or_false(sector, prompt("The industry code for", name), raw.industry),
        ];
    }

    /// Integer attribute, distractors drawn from `[0, 2 * answer)`.
    pub fn count_question(&mut self, sector: &str, text: String, answer: u64) -> Question {
        let upper = answer.saturating_mul(2);
        let distractors = (0..DISTRACTOR_COUNT)
            .map(|_| format_thousands(self.source.next_in_range(0, upper)))
            .collect();
        self.place_answer(sector, text, distractors, format_thousands(answer))
    }

    /// Decimal attribute, shown truncated to a whole number.
    pub fn amount_question(&mut self, sector: &str, text: String, answer: f64) -> Question {
        let upper = answer * 2.0;
        let distractors = (0..DISTRACTOR_COUNT)
            .map(|_| format_truncated(self.source.next_f64_in_range(0.0, upper)))
            .collect();
        self.place_answer(sector, text, distractors, format_truncated(answer))
    }

    /// Productivity comes pre-formatted, so its distractors ignore the real value.
    pub fn productivity_question(&mut self, sector: &str, text: String, answer: &str) -> Question {
        let distractors = (0..DISTRACTOR_COUNT)
            .map(|_| format!("{}%", self.source.next_in_range(0, PRODUCTIVITY_DISTRACTOR_BOUND)))
            .collect();
        self.place_answer(sector, text, distractors, answer.to_string())
    }

    pub fn sector_question(&mut self, sector: &str, text: String) -> Question {
        let distractors = (0..DISTRACTOR_COUNT)
            .map(|_| self.source.next_in_range(0, SECTOR_DISTRACTOR_BOUND).to_string())
            .collect();
        self.place_answer(sector, text, distractors, sector.to_string())
    }

    /// States either the real industry code or a random one in `[0, 2 * code)`.
    pub fn true_or_false(&mut self, sector: &str, text: String, industry: u64) -> Question {
        let stated = if self.source.next_in_range(0, 2) == 0 {
            industry
        } else {
            self.source.next_in_range(0, industry.saturating_mul(2))
        };

        // A random code can land on the real one, which makes the statement true
        let answer_index = if self.legacy_true_false || stated == industry {
            0
        } else {
            1
        };

        let choices = TRUE_FALSE_CHOICES.iter().map(|c| c.to_string()).collect();
        let text = format!("{} industry is {}", text, stated);
        return Question::new(sector.to_string(), text, answer_index, choices);
    }

    // The answer slot is drawn after the distractors, over all four final positions
    fn place_answer(
        &mut self,
        sector: &str,
        text: String,
        mut choices: Vec<String>,
        answer: String,
    ) -> Question {
        let answer_index = self.source.next_in_range(0, choices.len() as u64 + 1) as usize;
        choices.insert(answer_index, answer);
        let question = Question::new(
            sector.to_string(),
            text + QUESTION_SUFFIX,
            answer_index,
            choices,
        );
        log::trace!("{} -> {:?}", question.text, question.correct_choice());
        question
    }
}

fn prompt(lead: &str, industry_name: &str) -> String {
    format!("{} {}", lead, industry_name)
}

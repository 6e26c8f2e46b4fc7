//! Journal reply composer.
//!
//! Builds a short supportive reply from the classified mood and a handful of
//! cues found in the entry. A reply has five parts:
//!
//! 1. An opening keyed to the strongest cue (intensity words, a question,
//!    crying, laughing, or the first subject mentioned)
//! 2. An acknowledgement naming the mood, optionally with where it happened
//! 3. A support line
//! 4. An encouragement line ending in an emoji
//! 5. A closing for long entries
//!
//! Cue detection is plain substring matching on the lowercased entry.

use moodsync_engine::{ClassificationResult, MoodId};

const INTENSITY: &[&str] = &["very", "really", "so", "extremely", "incredibly"];
const CRYING: &[&str] = &["crying", "tears", "cried"];
const LAUGHING: &[&str] = &["laughing", "laugh", "smiled"];
const ACHIEVEMENT: &[&str] = &[
    "achieved", "accomplished", "finished", "completed", "succeeded", "won", "proud", "victory",
];
const ALONE: &[&str] = &["alone", "lonely", "nobody", "no one", "by myself", "isolated"];

const LONG_ENTRY_WORDS: usize = 80;
const MEDIUM_ENTRY_WORDS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Work,
    Family,
    Friends,
    Relationship,
    School,
    Health,
    Goals,
    Finances,
}

impl Subject {
    const ALL: [Subject; 8] = [
        Subject::Work,
        Subject::Family,
        Subject::Friends,
        Subject::Relationship,
        Subject::School,
        Subject::Health,
        Subject::Goals,
        Subject::Finances,
    ];

    fn cues(self) -> &'static [&'static str] {
        match self {
            Subject::Work => &[
                "work", "job", "office", "meeting", "project", "boss", "colleague", "deadline", "career",
                "presentation",
            ],
            Subject::Family => &[
                "family", "mom", "dad", "parent", "child", "kids", "brother", "sister", "husband", "wife", "son",
                "daughter",
            ],
            Subject::Friends => &["friend", "friends", "social", "party", "hangout", "gathering", "catch up"],
            Subject::Relationship => &[
                "love", "relationship", "partner", "dating", "boyfriend", "girlfriend", "crush", "romance",
            ],
            Subject::School => &[
                "school", "study", "exam", "test", "homework", "class", "teacher", "college", "university", "grade",
            ],
            Subject::Health => &[
                "sick", "tired", "energy", "sleep", "exercise", "workout", "pain", "headache", "doctor", "hospital",
            ],
            Subject::Goals => &[
                "goal", "dream", "plan", "future", "hope", "aspire", "achieve", "accomplish", "ambition",
            ],
            Subject::Finances => &[
                "money", "financial", "bills", "debt", "salary", "pay", "expensive", "afford", "budget",
            ],
        }
    }

    fn opener(self) -> &'static str {
        match self {
            Subject::Work => "Work situations can be complex. ",
            Subject::Family => "Family dynamics bring up so much. ",
            Subject::Relationship => "Relationships touch our deepest emotions. ",
            Subject::Friends => "Friendships are so important. ",
            Subject::School => "Academic life has its challenges. ",
            Subject::Health => "Your wellbeing matters. ",
            Subject::Goals => "Your aspirations are meaningful. ",
            Subject::Finances => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Completed,
    Started,
    WorkingOn,
    StruggledWith,
}

impl Action {
    const ALL: [Action; 4] = [Action::Completed, Action::Started, Action::WorkingOn, Action::StruggledWith];

    fn cues(self) -> &'static [&'static str] {
        match self {
            Action::Completed => &["finished", "completed", "done", "accomplished"],
            Action::Started => &["started", "began", "beginning"],
            Action::WorkingOn => &["trying", "attempting", "working on"],
            Action::StruggledWith => &["failed", "didn't work", "couldn't"],
        }
    }
}

/// Everything the composer reads from an entry.
#[derive(Debug)]
struct EntryCues {
    intense: bool,
    question: bool,
    crying: bool,
    laughing: bool,
    achievement: bool,
    alone: bool,
    subjects: Vec<Subject>,
    first_action: Option<Action>,
    mention: Option<&'static str>,
    words: usize,
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

impl EntryCues {
    fn read(text: &str) -> Self {
        let lower = text.to_lowercase();
        let mention = [
            (contains_any(&lower, &["today"]), "today"),
            (contains_any(&lower, &["work", "job"]), "at work"),
            (contains_any(&lower, &["family"]), "with your family"),
            (contains_any(&lower, &["friend"]), "with friends"),
            (contains_any(&lower, &["relationship", "partner"]), "in your relationship"),
        ]
        .into_iter()
        .find_map(|(hit, phrase)| hit.then_some(phrase));

        Self {
            intense: contains_any(&lower, INTENSITY),
            question: text.contains('?'),
            crying: contains_any(&lower, CRYING),
            laughing: contains_any(&lower, LAUGHING),
            achievement: contains_any(&lower, ACHIEVEMENT),
            alone: contains_any(&lower, ALONE),
            subjects: Subject::ALL
                .into_iter()
                .filter(|subject| contains_any(&lower, subject.cues()))
                .collect(),
            first_action: Action::ALL
                .into_iter()
                .find(|action| contains_any(&lower, action.cues())),
            mention,
            words: text.split_whitespace().count(),
        }
    }

    fn mentions_subject(&self, subject: Subject) -> bool {
        self.subjects.contains(&subject)
    }
}

/// Compose the journal reply for `text` classified as `result`.
pub fn compose_reply(text: &str, result: &ClassificationResult) -> String {
    let cues = EntryCues::read(text);
    let mood = result.mood;

    let main = format!(
        "{} {} {}",
        acknowledgement(mood, &cues),
        support(mood, &cues),
        encouragement(mood, &cues)
    );
    format!("{}{}{}", opening(mood, &cues), main.trim(), closing(&cues))
}

fn opening(mood: MoodId, cues: &EntryCues) -> &'static str {
    if cues.intense {
        return intensity_opener(mood).unwrap_or("");
    }
    if cues.question {
        return "I hear your questions. ";
    }
    if cues.crying {
        return "It's completely okay to let those tears flow. ";
    }
    if cues.laughing {
        return "Your joy is wonderful to witness! ";
    }
    cues.subjects.first().map_or("", |subject| subject.opener())
}

fn intensity_opener(mood: MoodId) -> Option<&'static str> {
    use MoodId::*;
    let line = match mood {
        Happy => "I can feel your excitement radiating through your words! ",
        Sad => "I sense the depth of what you're going through. ",
        Angry => "Your frustration is completely valid. ",
        Anxious => "I can feel the weight of your worries. ",
        Overwhelmed => "I hear how much you're carrying right now. ",
        Excited => "Your energy is absolutely electric! ",
        Grateful => "Your appreciation shines through beautifully. ",
        Lonely => "I understand how isolating this feels. ",
        Tired => "I can sense your exhaustion. ",
        Motivated => "Your determination is inspiring! ",
        Confident => "Your self-assurance is powerful! ",
        Guilty => "I can feel the weight of what you're carrying. ",
        Confused => "I hear the uncertainty in your thoughts. ",
        Hopeful => "Your optimism is touching. ",
        InLove => "The joy in your words is beautiful! ",
        Calm => "Your peace is palpable. ",
        Bored => "I sense you're craving something more. ",
        _ => return None,
    };
    Some(line)
}

fn acknowledgement(mood: MoodId, cues: &EntryCues) -> String {
    use MoodId::*;
    let at = |joiner: &str| cues.mention.map(|m| format!(" {joiner}{m}")).unwrap_or_default();
    match mood {
        Happy if cues.achievement => format!("I can feel your pride in what you've accomplished{}!", at("")),
        Happy => format!("Your happiness{} is wonderful to see!", at("")),
        Sad => format!("I hear the sadness{} in your words.", at("")),
        Angry => format!("Your frustration{} is completely valid.", at("")),
        Anxious => format!("I can sense the worry you're carrying{}.", at("")),
        Overwhelmed => format!("I understand how much you're juggling{}.", at("")),
        Excited => format!("Your excitement{} is contagious!", at("about ")),
        Grateful => format!("Your gratitude{} is beautiful.", at("for ")),
        Lonely => format!("I hear how isolated you're feeling{}.", at("")),
        Tired => format!("Your exhaustion{} is real.", at("from ")),
        Motivated => format!("Your drive{} is inspiring!", at("")),
        Confident => format!("Your self-assurance{} shines through!", at("")),
        Guilty => format!("I can feel the weight of what you're carrying{}.", at("")),
        Confused => format!("The uncertainty you're experiencing{} makes sense.", at("")),
        Hopeful => format!("Your optimism{} is touching.", at("about ")),
        InLove => format!("The joy in your words{} is beautiful!", at("")),
        Calm => format!("The peace you've found{} is precious.", at("")),
        Bored => format!("I sense you're craving something more{}.", at("than ")),
        _ => format!("I hear what you're sharing{}.", at("")),
    }
}

fn support(mood: MoodId, cues: &EntryCues) -> &'static str {
    use MoodId::*;
    match mood {
        Happy if cues.achievement => "You've earned this moment - celebrate it fully!",
        Happy => "Hold onto this feeling and let it fuel you.",
        Sad if cues.alone => "You're not alone in this, even when it feels that way.",
        Sad => "It's okay to feel this way - your emotions are valid.",
        Angry => "Your anger shows you care deeply about this.",
        Anxious if cues.mentions_subject(Subject::Work) || cues.mentions_subject(Subject::School) => {
            "Take it one step at a time - you don't have to do everything at once."
        }
        Anxious => "Breathe through this - you're stronger than this worry.",
        Overwhelmed => "You don't have to carry it all right now.",
        Excited => "This energy is powerful - channel it into what matters to you!",
        Grateful => "This appreciation will multiply the good in your life.",
        Lonely => "Connection is possible, and you deserve it.",
        Tired => "Rest isn't weakness - it's what your body needs.",
        Motivated => "This drive will take you far - keep that momentum!",
        Confident => "You know your worth, and that's everything.",
        Guilty => "Learn from this, then be kind to yourself.",
        Confused => "Clarity often comes after we sit with uncertainty.",
        Hopeful => "Hope is what carries us forward - keep believing.",
        InLove => "Let yourself enjoy this beautiful connection!",
        Calm => "Savor this tranquility - you've found something special.",
        Bored => "Your mind is ready for something new and exciting.",
        _ => "I'm here with you through this.",
    }
}

fn encouragement(mood: MoodId, cues: &EntryCues) -> &'static str {
    use MoodId::*;
    match mood {
        Happy if cues.first_action == Some(Action::Completed) => "Keep building on this success! 🌟",
        Happy => "You deserve all this joy! ✨",
        Sad => "Tomorrow brings new possibilities. 💙",
        Angry => "Channel this energy wisely - you've got this. 💪",
        Anxious => "You'll get through this, one moment at a time. 🌸",
        Overwhelmed => "Take it step by step - you're capable. 🤗",
        Excited => "Ride this wave as far as it takes you! 🚀",
        Grateful => "Keep counting your blessings! 🙏",
        Lonely => "Better connections are coming. 💜",
        Tired => "Give yourself permission to rest. 💤",
        Motivated => "Make it happen - you're unstoppable! 🔥",
        Confident => "Own it - you're amazing! 😎",
        Guilty => "Forgive yourself and move forward. 🌱",
        Confused => "Trust the process - answers will come. 🧭",
        Hopeful => "Keep that hope alive - it's powerful! 🌅",
        InLove => "Cherish every moment! ❤️",
        Calm => "Hold onto this peace. 🍃",
        Bored => "Time to explore something new! 🎨",
        _ => "You've got this! 💪",
    }
}

fn closing(cues: &EntryCues) -> &'static str {
    if cues.words > LONG_ENTRY_WORDS {
        " Thank you for sharing so openly - your self-reflection is powerful."
    } else if cues.words > MEDIUM_ENTRY_WORDS {
        " Your honesty is appreciated."
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use moodsync_engine::{ArbiterCandidate, classify, validate_candidate};

    fn as_mood(mood: &str) -> ClassificationResult {
        validate_candidate(&ArbiterCandidate::new(mood, 0.8)).unwrap()
    }

    #[test]
    fn intense_happy_entry() {
        let text = "I am very happy and excited!!!";
        assert_eq!(
            compose_reply(text, &classify(text)),
            "I can feel your excitement radiating through your words! Your happiness is wonderful to see! \
             Hold onto this feeling and let it fuel you. You deserve all this joy! ✨"
        );
    }

    #[test]
    fn sad_and_alone_today() {
        assert_eq!(
            compose_reply("I feel alone today", &as_mood("sad")),
            "I hear the sadness today in your words. You're not alone in this, even when it feels that way. \
             Tomorrow brings new possibilities. 💙"
        );
    }

    #[test]
    fn anxious_about_work() {
        assert_eq!(
            compose_reply("Big presentation at work tomorrow", &as_mood("anxious")),
            "Work situations can be complex. I can sense the worry you're carrying at work. \
             Take it one step at a time - you don't have to do everything at once. \
             You'll get through this, one moment at a time. 🌸"
        );
    }

    #[test]
    fn completed_achievement() {
        assert_eq!(
            compose_reply("Finished the project today", &as_mood("happy")),
            "Work situations can be complex. I can feel your pride in what you've accomplished today! \
             You've earned this moment - celebrate it fully! Keep building on this success! 🌟"
        );
    }

    #[test]
    fn crying_opener() {
        assert_eq!(
            compose_reply("I cried all night", &as_mood("sad")),
            "It's completely okay to let those tears flow. I hear the sadness in your words. \
             It's okay to feel this way - your emotions are valid. Tomorrow brings new possibilities. 💙"
        );
    }

    #[test]
    fn question_opener() {
        assert_eq!(
            compose_reply("What should I do?", &as_mood("confused")),
            "I hear your questions. The uncertainty you're experiencing makes sense. \
             Clarity often comes after we sit with uncertainty. Trust the process - answers will come. 🧭"
        );
    }

    #[test]
    fn intensity_without_opener_leaves_opening_empty() {
        assert_eq!(
            compose_reply("I am really stressed", &as_mood("stressed")),
            "I hear what you're sharing. I'm here with you through this. You've got this! 💪"
        );
    }

    #[test]
    fn generic_mood_with_subject_opener() {
        assert_eq!(
            compose_reply("Deadline stress", &as_mood("stressed")),
            "Work situations can be complex. I hear what you're sharing. I'm here with you through this. \
             You've got this! 💪"
        );
    }

    #[test]
    fn mention_joiners_vary_by_mood() {
        let excited = compose_reply("Trip today", &as_mood("excited"));
        assert!(excited.contains("Your excitement about today is contagious!"), "{excited}");
        let tired = compose_reply("Long shift today", &as_mood("tired"));
        assert!(tired.contains("Your exhaustion from today is real."), "{tired}");
        let bored = compose_reply("Nothing today", &as_mood("bored"));
        assert!(bored.contains("craving something more than today."), "{bored}");
    }

    #[test]
    fn long_entries_get_closing() {
        let medium = "word ".repeat(51);
        assert!(compose_reply(&medium, &as_mood("calm")).ends_with(" Your honesty is appreciated."));

        let long = "word ".repeat(81);
        assert!(
            compose_reply(&long, &as_mood("calm"))
                .ends_with(" Thank you for sharing so openly - your self-reflection is powerful.")
        );

        let short = "word ".repeat(50);
        assert!(compose_reply(&short, &as_mood("calm")).ends_with("Hold onto this peace. 🍃"));
    }

    #[test]
    fn every_mood_gets_a_reply() {
        for mood in MoodId::ALL {
            let reply = compose_reply("A day.", &as_mood(mood.as_str()));
            assert!(!reply.is_empty());
            assert!(!reply.starts_with(' '));
        }
    }
}

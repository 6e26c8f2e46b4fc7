//! Declarative mood table.
//!
//! Entries appear in [`MoodId::ALL`] order. Keyword lists are kept exactly as
//! curated, duplicates included: a keyword listed twice scores twice.

use super::{MoodDefinition, Valence};
use crate::types::MoodId;

pub(super) static MOODS: [MoodDefinition; MoodId::COUNT] = [
    MoodDefinition {
        id: MoodId::Happy,
        label: "Happy",
        emoji: "😊",
        color: "#FFD93D",
        default_reply: "Love the positive energy! Keep shining ✨",
        valence: Valence::Positive,
        keywords: &[
            "happy", "happiness", "joy", "joyful", "joyous", "excited", "exciting", "excitement",
            "great", "wonderful", "amazing", "fantastic", "excellent", "good day", "best day",
            "awesome", "brilliant", "cheerful", "delighted", "delightful", "elated", "euphoric",
            "glad", "grateful", "gratitude", "thrilled", "upbeat", "positive", "positivity",
            "optimistic", "blessed", "lucky", "fortunate", "love", "loving", "loved", "adore",
            "accomplished", "achievement", "achieved", "successful", "success", "proud",
            "confident", "confidence", "smile", "smiling", "laughing", "laugh", "fun", "enjoy",
            "enjoying", "enjoyed", "pleasure", "satisfied", "satisfaction", "celebrate",
            "celebrating", "celebration", "win", "winning", "victory", "triumph", "perfect",
            "incredible", "beautiful", "blessed", "thankful", "appreciate", "appreciation",
            "grateful", "gratitude", "content", "contentment",
        ],
    },
    MoodDefinition {
        id: MoodId::Sad,
        label: "Sad",
        emoji: "😢",
        color: "#5DA3FA",
        default_reply: "It's okay to feel this way. Tomorrow is a new day 💙",
        valence: Valence::Negative,
        keywords: &[
            "sad", "sadness", "unhappy", "down", "feeling down", "depressed", "depression",
            "lonely", "loneliness", "disappointed", "disappointment", "hurt", "hurting",
            "heartbroken", "heartbreak", "bad day", "terrible day", "worst day", "awful",
            "horrible", "miserable", "gloomy", "melancholy", "melancholic", "crying", "cry",
            "cried", "tears", "tearful", "upset", "devastated", "broken", "empty", "emptiness",
            "hopeless", "hopelessness", "despair", "grief", "grieving", "mourning", "mourn",
            "loss", "lost", "rejected", "rejection", "abandoned", "abandonment", "isolated",
            "isolation", "blue", "low", "down", "sorrow", "sorrowful", "painful", "pain", "ache",
            "aching", "suffering", "suffer", "struggle", "struggling", "difficult", "hard time",
            "can't cope", "giving up", "worthless", "useless", "failure", "failed", "regret",
            "regretting", "miss", "missing",
        ],
    },
    MoodDefinition {
        id: MoodId::Angry,
        label: "Angry",
        emoji: "😠",
        color: "#FF6B6B",
        default_reply: "Take a deep breath. Channel this energy positively 💪",
        valence: Valence::Negative,
        keywords: &[
            "angry", "anger", "mad", "madness", "frustrated", "frustration", "frustrating",
            "annoyed", "annoying", "irritated", "irritating", "irritation", "furious", "rage",
            "raging", "pissed", "pissed off", "hate", "hating", "hatred", "disgusted",
            "disgusting", "disgust", "outraged", "outrage", "livid", "seething", "fuming",
            "irate", "resentful", "resentment", "resent", "bitter", "bitterness", "hostile",
            "hostility", "aggressive", "aggression", "violent", "violence", "explosive", "fed up",
            "can't stand", "sick of", "tired of", "infuriating", "infuriated", "maddening",
            "enraging", "enraged", "pissed", "furious", "livid", "incensed", "indignant",
            "wrathful", "wrath", "boiling", "steaming", "unfair", "injustice", "betrayed",
            "betrayal", "disrespected", "disrespect", "insulted", "insult",
        ],
    },
    MoodDefinition {
        id: MoodId::Anxious,
        label: "Anxious",
        emoji: "😰",
        color: "#9D84B7",
        default_reply: "You've got this. One step at a time 🌸",
        valence: Valence::Negative,
        keywords: &[
            "anxious", "anxiety", "worried", "worry", "worrying", "nervous", "nervousness",
            "stressed", "stress", "stressful", "overwhelmed", "overwhelming", "panic",
            "panicking", "panicked", "fear", "fearful", "scared", "scary", "stress",
            "stressed out", "tension", "tense", "pressure", "pressured", "uneasy", "unease",
            "restless", "agitated", "troubled", "troubling", "concerned", "concern",
            "apprehensive", "frightened", "terrified", "paranoid", "insecure", "insecurity",
            "uncertain", "uncertainty", "doubt", "doubtful", "doubting", "hesitant", "hesitate",
            "jittery", "on edge", "wound up", "tense", "frantic", "frantically",
            "racing thoughts", "can't breathe", "heart racing", "shaking", "trembling",
            "sweating", "nauseous", "dizzy", "what if", "worried about", "scared of", "afraid",
            "frightened", "dread", "dreading", "nightmare", "can't sleep", "insomnia",
        ],
    },
    MoodDefinition {
        id: MoodId::Excited,
        label: "Excited",
        emoji: "🤩",
        color: "#FF69B4",
        default_reply: "Your enthusiasm is contagious! Ride this wave of excitement! 🚀",
        valence: Valence::Positive,
        keywords: &[
            "excited", "thrilled", "pumped", "hyped", "energetic", "enthusiastic", "eager",
            "can't wait", "looking forward", "anticipating", "buzzing", "electric", "fired up",
            "stoked", "amped", "psyched", "exhilarated", "animated", "vibrant", "dynamic",
            "passionate", "motivated", "inspired", "charged", "ready", "adventure",
            "new opportunity",
        ],
    },
    MoodDefinition {
        id: MoodId::Calm,
        label: "Calm",
        emoji: "😌",
        color: "#90EE90",
        default_reply: "Beautiful peace. Savor this moment 🍃",
        valence: Valence::Neutral,
        keywords: &[
            "calm", "peaceful", "relaxed", "serene", "tranquil", "content", "zen", "balanced",
            "centered", "composed", "quiet", "still", "gentle", "soothing", "restful", "mellow",
            "meditative", "mindful", "present", "grounded", "stable", "steady", "harmonious",
            "at peace", "inner peace", "serenity", "stillness", "silence", "breathe", "breathing",
        ],
    },
    MoodDefinition {
        id: MoodId::Stressed,
        label: "Stressed",
        emoji: "😓",
        color: "#FF6B9D",
        default_reply: "Stress is a signal that you're pushing yourself. Take a moment to breathe and prioritize 🌸",
        valence: Valence::Negative,
        keywords: &[
            "stressed", "stress", "stressful", "pressure", "pressured", "under pressure",
            "deadline", "deadlines", "rushed", "rushing", "hurried", "hurry", "urgent", "urgency",
            "time pressure", "time crunch", "overwhelmed", "swamped", "buried", "drowning",
            "too much", "can't handle", "breaking point", "tension", "tense", "tight", "strained",
            "straining", "pushed", "pushing", "demanding", "workload", "heavy load", "burden",
            "weight", "crushing", "suffocating", "squeezed", "racing", "racing thoughts",
            "mind racing", "can't slow down", "non-stop", "constant", "burnout", "burning out",
            "exhausted", "drained", "depleted", "running on empty",
        ],
    },
    MoodDefinition {
        id: MoodId::Bored,
        label: "Bored",
        emoji: "😐",
        color: "#94A3B8",
        default_reply: "Time for something new! What sparks your curiosity? 🤔",
        valence: Valence::Neutral,
        keywords: &[
            "bored", "boring", "dull", "uninterested", "monotonous", "tedious", "bland", "plain",
            "nothing to do", "same old", "routine", "repetitive", "uninspiring", "lifeless",
            "stagnant", "stuck", "restless", "listless", "apathetic", "indifferent", "numb",
            "empty", "void", "meaningless", "pointless", "going through motions", "autopilot",
        ],
    },
    MoodDefinition {
        id: MoodId::Content,
        label: "Content",
        emoji: "😊",
        color: "#98FB98",
        default_reply: "Contentment is a gift. You've found peace in the present moment 🕊️",
        valence: Valence::Positive,
        keywords: &[
            "content", "satisfied", "at peace", "comfortable", "settled", "fulfilled", "complete",
            "enough", "sufficient", "good enough", "okay with", "accepting", "balanced", "stable",
            "steady", "even", "moderate", "reasonable", "fair", "adequate", "pleasant", "nice",
            "fine", "alright", "decent", "satisfactory", "wholesome",
        ],
    },
    MoodDefinition {
        id: MoodId::Irritable,
        label: "Irritable",
        emoji: "😒",
        color: "#FF8C00",
        default_reply: "Irritability often signals unmet needs. Take a moment to check in with yourself 🧘",
        valence: Valence::Neutral,
        keywords: &[
            "irritable", "irritability", "cranky", "grumpy", "grouchy", "snappy",
            "short-tempered", "touchy", "sensitive", "on edge", "testy", "peevish", "petulant",
            "cantankerous", "easily annoyed", "everything bothers me", "can't deal", "short fuse",
            "quick to anger",
        ],
    },
    MoodDefinition {
        id: MoodId::Disappointed,
        label: "Disappointed",
        emoji: "😞",
        color: "#6B7FD7",
        default_reply: "Disappointment is part of growth. Your feelings are valid, and better things are ahead 🌈",
        valence: Valence::Neutral,
        keywords: &[
            "disappointed", "disappointment", "let down", "disheartened", "discouraged",
            "disillusioned", "not what I expected", "not as good", "underwhelmed",
            "expected more", "hoped for better", "crushed", "shattered", "broken promise",
            "didn't work out", "not what I wanted",
        ],
    },
    MoodDefinition {
        id: MoodId::Hopeful,
        label: "Hopeful",
        emoji: "🌅",
        color: "#FFB347",
        default_reply: "Hope is a powerful force. Keep believing in better days ahead! 🌈",
        valence: Valence::Positive,
        keywords: &[
            "hopeful", "optimistic", "positive", "looking up", "better days", "light at the end",
            "things will improve", "getting better", "recovery", "healing", "progress", "forward",
            "future", "tomorrow", "possibility", "potential", "opportunity", "chance", "maybe",
            "perhaps", "could be", "might", "hoping", "wishing", "dreaming", "believing",
        ],
    },
    MoodDefinition {
        id: MoodId::Overwhelmed,
        label: "Overwhelmed",
        emoji: "😵",
        color: "#CD853F",
        default_reply: "Take it one step at a time. You don't have to carry it all at once 🤗",
        valence: Valence::Negative,
        keywords: &[
            "overwhelmed", "too much", "can't handle", "drowning", "swamped", "buried",
            "overloaded", "stressed out", "breaking point", "at capacity", "maxed out",
            "juggling too much", "plate is full", "stretched thin", "burning out", "exhausted",
            "pressure", "weight of the world", "suffocating", "crushing", "intense", "heavy",
        ],
    },
    MoodDefinition {
        id: MoodId::Relaxed,
        label: "Relaxed",
        emoji: "😌",
        color: "#87CEEB",
        default_reply: "Relaxation is restorative. You're giving yourself the rest you deserve 🌊",
        valence: Valence::Neutral,
        keywords: &[
            "relaxed", "relaxing", "unwinding", "chill", "chilling", "laid back", "easygoing",
            "loose", "loosened up", "at ease", "comfortable", "cozy", "snug", "restful",
            "taking it easy", "no rush", "slow pace", "leisurely", "unhurried", "mellow",
        ],
    },
    MoodDefinition {
        id: MoodId::Frustrated,
        label: "Frustrated",
        emoji: "😤",
        color: "#FF8C42",
        default_reply: "Frustration is temporary. Take a breath and tackle this one step at a time 💪",
        valence: Valence::Negative,
        keywords: &[
            "frustrated", "frustration", "frustrating", "annoyed", "annoying", "irritated",
            "irritating", "irritation", "fed up", "sick of", "tired of", "had enough",
            "can't stand", "driving me crazy", "driving me nuts", "stuck", "blocked",
            "can't get it", "not working", "not happening", "nothing works", "aggravated",
            "exasperated", "bothered", "irked", "vexed", "disgruntled", "impatient", "impatience",
            "restless", "antsy", "on edge", "tense", "struggling", "struggle", "difficult",
            "hard", "challenging", "tough", "blocked", "stuck", "can't progress",
            "hitting a wall", "dead end",
        ],
    },
    MoodDefinition {
        id: MoodId::Joyful,
        label: "Joyful",
        emoji: "😄",
        color: "#FFD700",
        default_reply: "Joy radiates from you! This happiness is beautiful to see! ✨",
        valence: Valence::Positive,
        keywords: &[
            "joyful", "joy", "bliss", "blissful", "ecstatic", "elated", "euphoric", "rapturous",
            "overjoyed", "thrilled", "delighted", "gleeful", "jubilant", "exuberant", "radiant",
            "pure joy", "bursting with joy", "filled with joy", "heart full", "soul happy",
        ],
    },
    MoodDefinition {
        id: MoodId::Depressed,
        label: "Depressed",
        emoji: "😔",
        color: "#4A5568",
        default_reply: "You're not alone in this. Reach out for support - there's help and hope available 💙",
        valence: Valence::Negative,
        keywords: &[
            "depressed", "depression", "deep sadness", "hopeless", "despair", "empty", "numb",
            "can't feel", "nothing matters", "no point", "worthless", "useless", "failure",
            "want to disappear", "don't want to exist", "dark", "heavy", "suffocating sadness",
        ],
    },
    MoodDefinition {
        id: MoodId::Lonely,
        label: "Lonely",
        emoji: "😔",
        color: "#708090",
        default_reply: "You're not alone, even when it feels that way. Connection is always possible 💜",
        valence: Valence::Negative,
        keywords: &[
            "lonely", "alone", "isolated", "solitary", "disconnected", "abandoned", "forgotten",
            "no one understands", "by myself", "single", "solo", "friendless", "outcast",
            "excluded", "left out", "missing someone", "need company", "craving connection",
            "social isolation", "withdrawn", "distant", "empty house", "silence", "nobody",
        ],
    },
    MoodDefinition {
        id: MoodId::Peaceful,
        label: "Peaceful",
        emoji: "🕊️",
        color: "#98D8C8",
        default_reply: "Peace is a gift. You've found harmony within yourself 🕊️",
        valence: Valence::Neutral,
        keywords: &[
            "peaceful", "peace", "inner peace", "tranquil", "serene", "harmonious", "balanced",
            "centered", "grounded", "still", "quiet mind", "calm soul", "at one", "unified",
        ],
    },
    MoodDefinition {
        id: MoodId::Nervous,
        label: "Nervous",
        emoji: "😟",
        color: "#C9A9DD",
        default_reply: "Nerves show you care. Take deep breaths - you've got this! 🌸",
        valence: Valence::Neutral,
        keywords: &[
            "nervous", "nervousness", "jittery", "jitters", "butterflies", "anxious", "uneasy",
            "on edge", "tense", "apprehensive", "worried", "fearful", "shaky", "trembling",
            "heart racing", "sweaty palms", "can't sit still", "restless", "anticipating",
        ],
    },
    MoodDefinition {
        id: MoodId::Apathetic,
        label: "Apathetic",
        emoji: "😑",
        color: "#95A5A6",
        default_reply: "Apathy can be a sign to reconnect with what matters. What used to spark joy? 🔍",
        valence: Valence::Neutral,
        keywords: &[
            "apathetic", "apathy", "indifferent", "uninterested", "don't care",
            "couldn't care less", "numb", "empty", "void", "nothing matters", "no feelings",
            "emotionless", "flat", "disconnected", "detached", "unmoved", "unaffected", "neutral",
            "blank",
        ],
    },
    MoodDefinition {
        id: MoodId::Enthusiastic,
        label: "Enthusiastic",
        emoji: "🎉",
        color: "#FF6B9D",
        default_reply: "Your enthusiasm is infectious! Channel this energy into what excites you! 🚀",
        valence: Valence::Positive,
        keywords: &[
            "enthusiastic", "enthusiasm", "eager", "zealous", "passionate", "fervent", "ardent",
            "excited", "pumped", "hyped", "fired up", "energized", "vibrant", "dynamic",
            "full of energy", "raring to go", "can't wait", "looking forward", "excited about",
        ],
    },
    MoodDefinition {
        id: MoodId::Melancholy,
        label: "Melancholy",
        emoji: "🌧️",
        color: "#6C7A89",
        default_reply: "Melancholy has its own beauty. Sometimes we need to sit with the quiet sadness 🌧️",
        valence: Valence::Neutral,
        keywords: &[
            "melancholy", "melancholic", "pensive", "wistful", "nostalgic", "bittersweet",
            "sad but beautiful", "quiet sadness", "gentle sadness", "reflective", "contemplative",
            "blue mood", "somber", "subdued", "mellow sadness",
        ],
    },
    MoodDefinition {
        id: MoodId::Annoyed,
        label: "Annoyed",
        emoji: "😒",
        color: "#FF9500",
        default_reply: "Annoyance is valid. Sometimes things just get under our skin. Take a breath 🧘",
        valence: Valence::Neutral,
        keywords: &[
            "annoyed", "annoying", "irritated", "bothered", "irked", "vexed", "miffed", "peeved",
            "riled up", "aggravated", "exasperated", "fed up", "sick of", "tired of",
        ],
    },
    MoodDefinition {
        id: MoodId::Optimistic,
        label: "Optimistic",
        emoji: "☀️",
        color: "#FFD93D",
        default_reply: "Optimism is a superpower! Your positive outlook will carry you far! ☀️",
        valence: Valence::Positive,
        keywords: &[
            "optimistic", "optimism", "positive outlook", "hopeful", "upbeat", "sunny",
            "bright side", "silver lining", "glass half full", "things will work out",
            "better days ahead", "looking forward", "positive thinking",
        ],
    },
    MoodDefinition {
        id: MoodId::Pessimistic,
        label: "Pessimistic",
        emoji: "☁️",
        color: "#708090",
        default_reply: "Pessimism can protect us, but don't let it dim your light. Small steps forward matter ☁️",
        valence: Valence::Neutral,
        keywords: &[
            "pessimistic", "pessimism", "negative", "gloomy", "downbeat", "doubtful", "skeptical",
            "cynical", "glass half empty", "worst case", "nothing will work", "doomed", "fated",
            "bound to fail", "no hope",
        ],
    },
    MoodDefinition {
        id: MoodId::Satisfied,
        label: "Satisfied",
        emoji: "😊",
        color: "#90EE90",
        default_reply: "Satisfaction is contentment earned. You've found what you needed! ✨",
        valence: Valence::Positive,
        keywords: &[
            "satisfied", "satisfaction", "fulfilled", "content", "pleased", "gratified",
            "got what I needed", "enough", "sufficient", "adequate", "good enough", "happy with",
            "pleased with", "content with", "at peace with",
        ],
    },
    MoodDefinition {
        id: MoodId::Worried,
        label: "Worried",
        emoji: "😰",
        color: "#9370DB",
        default_reply: "Worry shows you care. Focus on what you can control, one step at a time 💜",
        valence: Valence::Negative,
        keywords: &[
            "worried", "worry", "worrying", "concerned", "anxious", "uneasy", "troubled",
            "apprehensive", "fearful", "fretting", "stressing", "overthinking", "what if",
            "worried about", "concerned about", "can't stop worrying",
        ],
    },
    MoodDefinition {
        id: MoodId::Confident,
        label: "Confident",
        emoji: "😎",
        color: "#4169E1",
        default_reply: "Your confidence is inspiring! You know your worth! 👑",
        valence: Valence::Positive,
        keywords: &[
            "confident", "confidence", "self-assured", "self-confident", "assured", "certain",
            "believe in myself", "trust myself", "capable", "competent", "skilled", "talented",
            "I can do this", "I got this", "ready", "prepared", "strong", "powerful",
            "unstoppable", "fearless", "bold", "brave", "courageous", "self-esteem",
            "know my worth", "own it", "boss", "killing it", "crushing it",
        ],
    },
    MoodDefinition {
        id: MoodId::Grateful,
        label: "Grateful",
        emoji: "🙏",
        color: "#DDA0DD",
        default_reply: "Gratitude is a beautiful mindset. Your appreciation lights up the world! ✨",
        valence: Valence::Positive,
        keywords: &[
            "grateful", "thankful", "blessed", "appreciate", "appreciation", "fortunate", "lucky",
            "thank you", "thanks", "blessing", "gift", "privilege", "honor", "humbled",
            "count my blessings", "grateful for", "thankful for", "appreciate having", "value",
            "cherish", "treasure", "recognize", "acknowledge", "indebted", "gracious",
        ],
    },
    MoodDefinition {
        id: MoodId::Confused,
        label: "Confused",
        emoji: "😕",
        color: "#FFA07A",
        default_reply: "It's okay to feel uncertain. Clarity will come with time and reflection 🤔",
        valence: Valence::Neutral,
        keywords: &[
            "confused", "puzzled", "bewildered", "perplexed", "lost", "uncertain", "unclear",
            "don't understand", "mixed up", "baffled", "mystified", "stumped", "conflicted",
            "torn", "undecided", "unsure", "questioning", "wondering", "second guessing", "doubt",
            "dilemma", "crossroads", "complicated", "complex", "overwhelming choices",
        ],
    },
    MoodDefinition {
        id: MoodId::Proud,
        label: "Proud",
        emoji: "😤",
        color: "#32CD32",
        default_reply: "You should be proud! Your achievements deserve recognition 🏆",
        valence: Valence::Positive,
        keywords: &[
            "proud", "accomplished", "achieved", "success", "successful", "victory", "won",
            "completed", "finished", "done", "milestone", "breakthrough", "progress", "improved",
            "overcame", "conquered", "mastered", "excelled", "outstanding", "exceeded",
            "personal best", "goal reached", "dream come true", "hard work paid off", "earned",
        ],
    },
    MoodDefinition {
        id: MoodId::Tired,
        label: "Tired",
        emoji: "😴",
        color: "#B0C4DE",
        default_reply: "Rest is productive too. Listen to what your body needs 💤",
        valence: Valence::Neutral,
        keywords: &[
            "tired", "exhausted", "fatigue", "fatigued", "sleepy", "drowsy", "weary", "worn out",
            "drained", "depleted", "burned out", "burnout", "low energy", "no energy", "sluggish",
            "need sleep", "need rest", "can't keep eyes open", "yawning", "lethargic", "run down",
            "wiped out", "beat", "spent", "knackered", "pooped", "zonked",
        ],
    },
    MoodDefinition {
        id: MoodId::Motivated,
        label: "Motivated",
        emoji: "💪",
        color: "#FF6347",
        default_reply: "That drive is powerful! Channel this energy into your goals! 🔥",
        valence: Valence::Positive,
        keywords: &[
            "motivated", "motivation", "driven", "determined", "focused", "ambitious",
            "goal-oriented", "inspired", "energized", "pumped up", "ready to go", "let's do this",
            "fired up", "productive", "productive day", "getting things done", "on a roll",
            "momentum", "push forward", "make it happen", "take action", "hustle", "grind",
            "work hard",
        ],
    },
    MoodDefinition {
        id: MoodId::InLove,
        label: "In Love",
        emoji: "❤️",
        color: "#FF1493",
        default_reply: "Love is a beautiful feeling! Cherish these moments of connection 💕",
        valence: Valence::Positive,
        keywords: &[
            "in love", "love", "loving", "romance", "romantic", "smitten", "infatuated", "crush",
            "falling for", "head over heels", "butterflies", "heart flutters",
            "can't stop thinking about", "miss them", "thinking of you", "adore", "adoration",
            "affection", "passionate", "chemistry", "connection", "soulmate", "perfect match",
            "relationship", "partner", "boyfriend", "girlfriend", "significant other",
            "date night",
        ],
    },
    MoodDefinition {
        id: MoodId::Guilty,
        label: "Guilty",
        emoji: "😞",
        color: "#8B4513",
        default_reply: "Guilt shows you care. Learn from it and be kind to yourself 🌱",
        valence: Valence::Negative,
        keywords: &[
            "guilty", "guilt", "ashamed", "shame", "regret", "regretful", "remorse", "remorseful",
            "feel bad", "feeling bad about", "shouldn't have", "wish I didn't", "made a mistake",
            "messed up", "screwed up", "let down", "disappointed", "apologize", "sorry",
            "blame myself", "my fault", "responsible", "accountable", "conscience", "wrong",
            "did wrong", "hurt someone", "feel terrible", "beating myself up",
        ],
    },
];

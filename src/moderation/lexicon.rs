// Default English profanity lexicon.
//
// Whole words only, lowercase. Common spelling obfuscations and leetspeak
// variants are listed as their own entries; a variant only matches when it
// is made of word characters (letters, digits, `_`, `$`, `@`), since the
// tokenizer splits on everything else.

pub static DEFAULT_WORDS: &[&str] = &[
    "anal",
    "anus",
    "arse",
    "arsehole",
    "ass",
    "a$$",
    "a55",
    "@ss",
    "asses",
    "assfucker",
    "asshole",
    "assholes",
    "a$$hole",
    "a55hole",
    "asswipe",
    "bastard",
    "bastards",
    "b4stard",
    "bellend",
    "bitch",
    "bitches",
    "bitching",
    "bitchy",
    "b1tch",
    "biatch",
    "bollock",
    "bollocks",
    "boner",
    "boob",
    "boobs",
    "bullshit",
    "bullsh1t",
    "butthole",
    "buttplug",
    "clit",
    "cock",
    "cocks",
    "c0ck",
    "cocksucker",
    "cum",
    "cumshot",
    "cunt",
    "cunts",
    "cuntlicker",
    "damn",
    "damned",
    "dickhead",
    "dildo",
    "dildos",
    "douche",
    "douchebag",
    "dumbass",
    "dyke",
    "fag",
    "fagg0t",
    "faggot",
    "fags",
    "fcuk",
    "felching",
    "fuck",
    "fucked",
    "fucker",
    "fuckers",
    "fuckhead",
    "fuckin",
    "fucking",
    "fucks",
    "fuk",
    "fukker",
    "fukkin",
    "f4ck",
    "fck",
    "fuxk",
    "fudgepacker",
    "goddamn",
    "goddamned",
    "hell",
    "hoar",
    "hoe",
    "hore",
    "horny",
    "jackass",
    "jackoff",
    "jerkoff",
    "jizz",
    "knobend",
    "kunt",
    "labia",
    "masturbate",
    "motherfucker",
    "motherfuckers",
    "motherfucking",
    "mofo",
    "muthafucka",
    "nazi",
    "nigga",
    "nigger",
    "niggers",
    "n1gga",
    "n1gger",
    "nutsack",
    "orgasm",
    "penis",
    "phuck",
    "phuk",
    "piss",
    "pissed",
    "pisser",
    "pissing",
    "porn",
    "porno",
    "prick",
    "pube",
    "pussy",
    "pussies",
    "queef",
    "rectum",
    "retard",
    "scrotum",
    "sh1t",
    "shag",
    "shagging",
    "shemale",
    "shit",
    "shite",
    "shits",
    "shitted",
    "shitter",
    "shitting",
    "shitty",
    "shiz",
    "skank",
    "slut",
    "sluts",
    "smegma",
    "spunk",
    "testicle",
    "tit",
    "tits",
    "titties",
    "t1tt1e5",
    "turd",
    "twat",
    "twats",
    "vagina",
    "wank",
    "wanker",
    "wanky",
    "whore",
    "whores",
    "wh0re",
];

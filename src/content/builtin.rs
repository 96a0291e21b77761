//! Built-in prompt pools.
//!
//! Used directly by games that ship their prompts inline, and as the
//! fallback when a prompt document cannot be loaded.

use super::deck::{TruthOrDareDeck, PENALTY_QUESTION, PENALTY_TASK};
use super::pool::PromptPool;

/// Truth-or-Dare categories offered on the setup screen, with their emoji.
pub const TRUTH_OR_DARE_CATEGORIES: [(&str, &str); 6] = [
    ("Liebe & Beziehungen", "💕"),
    ("Körper & Gesundheit", "💪"),
    ("Geheimnisse", "🤐"),
    ("Abenteuer", "🚀"),
    ("Peinlich", "😳"),
    ("Mutprobe", "⚡"),
];

const BET_CHALLENGES: &[&str] = &[
    "🎯 Wie viele Liegestütze schaffst du?",
    "⏱️ Wie lange kannst du auf einem Bein stehen?",
    "🔤 Wie viele Wörter kannst du in 30 Sekunden aufzählen?",
    "🎵 Wie lange hältst du einen Ton?",
    "💪 Wie lange Plank?",
    "👟 Wie weit kannst du springen?",
    "🎲 Wie oft kannst du eine Münze werfen?",
    "🧮 Wie schnell kannst du bis 100 zählen?",
];

const NEVER_HAVE_I_EVER: &[&str] = &[
    "...im Regen getanzt",
    "...einen Horrorfilm nicht zu Ende geschaut",
    "...ein Lied im Auto laut gesungen",
    "...mich verlaufen",
    "...einen Film 2x hintereinander geschaut",
    "...Sushi gegessen",
    "...eine Lüge sagen musste",
    "...einen Fehler gleich gestanden",
    "...nachts wach gelegen und über etwas nachgedacht",
    "...Albträume gehabt",
    "...jemanden um Verzeihung gebeten",
    "...einen Fehler wiederholt",
    "...etwas bereut",
    "...heimlich gelacht",
    "...jemanden vermisst",
    "...eine Überraschung bekommen",
    "...spontan eine Party geschmissen",
    "...einen Unfall gehabt",
    "...ein Geheimnis verraten",
    "...jemanden nett überrascht",
    "...ein böses Wort gesagt",
    "...nachts spielen gegangen",
    "...jemanden tief verletzt",
    "...jemandem verziehen",
    "...etwas Mutiges getan",
    "...mich unsterblich verliebt",
    "...in einem See gebadet",
    "...ein Konzert besucht",
    "...einen Preis gewonnen",
];

const WHO_WOULD_RATHER: &[&str] = &[
    "...auf eine Party gehen, obwohl niemand andere kennt?",
    "...im Supermarkt Ware einfach stehen lassen?",
    "...öffentlich singen?",
    "...einen Horrorfilm nicht bis zum Ende schauen?",
    "...sich schämen, wenn jemand eine falsche Frage stellt?",
    "...einen unerwarteten Anruf ignorieren?",
    "...eine Lüge sagen, um Zeit zu sparen?",
    "...barfuß im Winter rausgehen?",
    "...bei einem schlechten Film bleiben?",
    "...ohne Frühstück rausgehen?",
    "...eine Nachricht 3x durchlesen vor dem Senden?",
    "...im Dunkeln ins Bett springen?",
    "...einen Fehler zugeben?",
    "...mit Schuhen ins Bett gehen?",
    "...einen Film 2x schauen?",
    "...vergeblich für jemanden warten?",
    "...eine Spinne ignorieren?",
    "...beim Zahnarzt weinen?",
    "...den falschen Namen nennen?",
    "...einen Freund vergessen?",
    "...bei Regen spielen gehen?",
    "...zu einer Party ohne Geschenk gehen?",
    "...einen Horror-Lift nehmen?",
    "...das Essen anderer testen?",
    "...den Weg fragen, obwohl man eine Karte hat?",
    "...Text vor dem Senden löschen?",
    "...nach Fremden zum Datum fragen?",
    "...im Restaurant Essen zurückgeben?",
    "...ein Bad mit zu heißem Wasser nehmen?",
    "...eine Einladung ablehnen?",
];

/// Challenges teams bet on.
pub fn bet_challenges() -> PromptPool {
    PromptPool::flat(BET_CHALLENGES.iter().copied())
}

/// "Ich hab noch nie ..." statements.
pub fn never_have_i_ever() -> PromptPool {
    PromptPool::flat(NEVER_HAVE_I_EVER.iter().copied())
}

/// "Wer würde eher ..." questions.
pub fn who_would_rather() -> PromptPool {
    PromptPool::flat(WHO_WOULD_RATHER.iter().copied())
}

/// Minimal deck used when `wop-questions.json` is unavailable.
pub fn truth_or_dare_deck() -> TruthOrDareDeck {
    let truth = PromptPool::categorized()
        .with_category("Liebe & Beziehungen", ["Hattest du schon mal einen Crush?", "Was ist dein Idealtyp?"])
        .with_category("Körper & Gesundheit", ["Wie oft machst du Sport?", "Was ist deine größte Unsicherheit?"])
        .with_category("Geheimnisse", ["Welches Geheimnis hast du?", "Hast du schon mal gelogen?"])
        .with_category("Abenteuer", ["Was ist das Verrückteste, das du getan hast?", "Wo möchtest du gerne hin?"])
        .with_category("Peinlich", ["Was ist die peinlichste Sache, die dir passiert ist?", "Hast du schon mal im Freien geweint?"])
        .with_category("Mutprobe", ["Würdest du abschreiben?", "Hast du schon mal etwas Illegales getan?"]);

    let dare = PromptPool::categorized()
        .with_category("Liebe & Beziehungen", ["Gib jemandem einen Kuss!", "Mache jemandem ein Kompliment!"])
        .with_category("Körper & Gesundheit", ["Mache 15 Liegestütze!", "Tanze 30 Sekunden lang!"])
        .with_category("Geheimnisse", ["Teile dein Passwort!", "Lies deine letzte SMS vor!"])
        .with_category("Abenteuer", ["Ruf jemanden an!", "Gehe nach draußen!"])
        .with_category("Peinlich", ["Mache komische Grimassen!", "Ahme jemanden nach!"])
        .with_category("Mutprobe", ["Iss etwas Verrücktes!", "Tue etwas Mutiges!"]);

    let penalty = PromptPool::categorized()
        .with_category(PENALTY_TASK, ["Laufe wild herum!", "Tauche deine Hand in Eiswasser!"])
        .with_category(PENALTY_QUESTION, ["Wann hast du zuletzt...?", "Hast du jemals...?"]);

    TruthOrDareDeck { truth, dare, penalty }
}

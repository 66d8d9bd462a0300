/// Vocabulary for generated default snippet names.
///
/// Covers every adjective length from 3 to 9 characters, the name
/// generator filters by length.
pub const NAME_ADJECTIVES: [&str; 45] = [
    "coy",
    "icy",
    "new",
    "odd",
    "shy",
    "sly",
    "bold",
    "calm",
    "cool",
    "deft",
    "glad",
    "keen",
    "neat",
    "tidy",
    "warm",
    "wild",
    "brave",
    "eager",
    "happy",
    "jolly",
    "lucky",
    "merry",
    "noble",
    "quiet",
    "bright",
    "clever",
    "gentle",
    "humble",
    "lively",
    "nimble",
    "polite",
    "steady",
    "curious",
    "gallant",
    "radiant",
    "sincere",
    "valiant",
    "zealous",
    "cheerful",
    "fearless",
    "graceful",
    "splendid",
    "brilliant",
    "sparkling",
    "steadfast",
];

pub const NAME_ANIMALS: [&str; 24] = [
    "badger", "beaver", "bison", "camel", "crane", "falcon", "ferret", "gecko", "heron", "jackal",
    "koala", "lemur", "lynx", "marmot", "ocelot", "otter", "panda", "puffin", "quokka", "salmon",
    "toucan", "walrus", "wombat", "zebra",
];

//! English book names.

use lectio_foundation::Book;
use lectio_language::Keywords;

use crate::table::LanguageTable;

/// The English table.
pub static TABLE: LanguageTable = LanguageTable {
    code: "en",
    books: BOOKS,
    translations: TRANSLATIONS,
    keywords: Keywords::english,
};

// LXX has no versification in the builtin store, so it is reported as an
// unrecognized translation.
const TRANSLATIONS: &[(&str, &[&str])] = &[
    ("ESV", &["ESV"]),
    ("NIV", &["NIV"]),
    ("KJV", &["KJV", "AV"]),
    ("NKJV", &["NKJV"]),
    ("NASB", &["NASB"]),
    ("NLT", &["NLT"]),
    ("CSB", &["CSB", "HCSB"]),
    ("NRSV", &["NRSV"]),
    ("NRSVUE", &["NRSVUE"]),
    ("CEB", &["CEB"]),
    ("NAB", &["NAB"]),
    ("NABRE", &["NABRE"]),
    ("DRA", &["DRA", "Douay-Rheims"]),
    ("VULGATE", &["Vulgate", "VUL"]),
    ("LXX", &["LXX", "Septuagint"]),
];

// Names shared by two books come last and list the more common book first.
const BOOKS: &[(&[Book], &[&str])] = &[
    (&[Book::Genesis], &["Genesis", "Gen", "Gn", "Ge"]),
    (&[Book::Exodus], &["Exodus", "Exod", "Exo", "Ex"]),
    (&[Book::Leviticus], &["Leviticus", "Lev", "Lv", "Le"]),
    (&[Book::Numbers], &["Numbers", "Num", "Nm", "Nu"]),
    (&[Book::Deuteronomy], &["Deuteronomy", "Deut", "Dt"]),
    (&[Book::Joshua], &["Joshua", "Josh", "Jos", "Jsh"]),
    (&[Book::Judges], &["Judges", "Judg", "Jdgs", "Jdg"]),
    (&[Book::Ruth], &["Ruth", "Rth", "Ru"]),
    (
        &[Book::FirstSamuel],
        &[
            "First Samuel", "1st Samuel", "1 Samuel", "I Samuel", "1 Sam", "I Sam", "1 Sm", "1 Sa",
            "I Sm", "I Sa",
        ],
    ),
    (
        &[Book::SecondSamuel],
        &[
            "Second Samuel", "2nd Samuel", "II Samuel", "2 Samuel", "II Sam", "2 Sam", "II Sm",
            "II Sa", "2 Sm", "2 Sa",
        ],
    ),
    (
        &[Book::FirstKings],
        &[
            "First Kings", "1st Kings", "1 Kings", "I Kings", "1 Kgs", "1 Kin", "I Kgs", "I Kin",
            "1 Ki", "I Ki",
        ],
    ),
    (
        &[Book::SecondKings],
        &[
            "Second Kings", "2nd Kings", "II Kings", "2 Kings", "II Kgs", "II Kin", "2 Kgs",
            "2 Kin", "II Ki", "2 Ki",
        ],
    ),
    (
        &[Book::FirstChronicles],
        &[
            "First Chronicles", "1st Chronicles", "1 Chronicles", "I Chronicles", "1 Chron",
            "I Chron", "1 Chr", "I Chr", "1 Ch", "I Ch",
        ],
    ),
    (
        &[Book::SecondChronicles],
        &[
            "Second Chronicles", "2nd Chronicles", "II Chronicles", "2 Chronicles", "II Chron",
            "2 Chron", "II Chr", "2 Chr", "II Ch", "2 Ch",
        ],
    ),
    (&[Book::Ezra], &["Ezra", "Ezr"]),
    (&[Book::Nehemiah], &["Nehemiah", "Neh", "Ne"]),
    (&[Book::Esther], &["Esther", "Esth", "Est"]),
    (&[Book::Job], &["Job", "Jb"]),
    (&[Book::Psalms], &["Psalms", "Psalm", "Pslm", "Pss", "Psa", "Ps"]),
    (&[Book::Proverbs], &["Proverbs", "Prov", "Prv", "Pro", "Pr"]),
    (&[Book::Ecclesiastes], &["Ecclesiastes", "Qoheleth", "Eccles", "Eccl", "Ecc", "Qoh"]),
    (
        &[Book::SongOfSongs],
        &[
            "Canticle of Canticles", "Song of Solomon", "Song of Songs", "Canticles", "Song", "SOS",
        ],
    ),
    (&[Book::Isaiah], &["Isaiah", "Isa"]),
    (&[Book::Jeremiah], &["Jeremiah", "Jer", "Jr"]),
    (&[Book::Lamentations], &["Lamentations", "Lam", "La"]),
    (&[Book::Ezekiel], &["Ezekiel", "Ezek", "Eze", "Ezk"]),
    (&[Book::Daniel], &["Daniel", "Dan", "Dn", "Da"]),
    (&[Book::Hosea], &["Hosea", "Hos", "Ho"]),
    (&[Book::Joel], &["Joel", "Jl"]),
    (&[Book::Amos], &["Amos", "Amo"]),
    (&[Book::Obadiah], &["Obadiah", "Obad", "Ob"]),
    (&[Book::Jonah], &["Jonah", "Jnh"]),
    (&[Book::Micah], &["Micah", "Mic"]),
    (&[Book::Nahum], &["Nahum", "Nah", "Na"]),
    (&[Book::Habakkuk], &["Habakkuk", "Hab"]),
    (&[Book::Zephaniah], &["Zephaniah", "Zeph", "Zep", "Zp"]),
    (&[Book::Haggai], &["Haggai", "Hag", "Hg"]),
    (&[Book::Zechariah], &["Zechariah", "Zech", "Zec", "Zc"]),
    (&[Book::Malachi], &["Malachi", "Mal", "Ml"]),
    (&[Book::Matthew], &["Matthew", "Matt", "Mt"]),
    (&[Book::Mark], &["Mark", "Mrk", "Mk", "Mr"]),
    (&[Book::Luke], &["Luke", "Luk", "Lk"]),
    (&[Book::John], &["John", "Jhn", "Jn"]),
    (&[Book::Acts], &["Acts of the Apostles", "Acts", "Act", "Ac"]),
    (&[Book::Romans], &["Romans", "Rom", "Rm", "Ro"]),
    (
        &[Book::FirstCorinthians],
        &[
            "First Corinthians", "1st Corinthians", "1 Corinthians", "I Corinthians", "1 Cor",
            "I Cor", "1 Co", "I Co",
        ],
    ),
    (
        &[Book::SecondCorinthians],
        &[
            "Second Corinthians", "2nd Corinthians", "II Corinthians", "2 Corinthians", "II Cor",
            "2 Cor", "II Co", "2 Co",
        ],
    ),
    (&[Book::Galatians], &["Galatians", "Gal", "Ga"]),
    (&[Book::Ephesians], &["Ephesians", "Eph", "Ep"]),
    (&[Book::Philippians], &["Philippians", "Phil", "Php"]),
    (&[Book::Colossians], &["Colossians", "Col"]),
    (
        &[Book::FirstThessalonians],
        &[
            "First Thessalonians", "1st Thessalonians", "1 Thessalonians", "I Thessalonians",
            "1 Thess", "I Thess", "1 Thes", "I Thes", "1 Th", "I Th",
        ],
    ),
    (
        &[Book::SecondThessalonians],
        &[
            "Second Thessalonians", "2nd Thessalonians", "II Thessalonians", "2 Thessalonians",
            "II Thess", "2 Thess", "II Thes", "2 Thes", "II Th", "2 Th",
        ],
    ),
    (
        &[Book::FirstTimothy],
        &[
            "First Timothy", "1st Timothy", "1 Timothy", "I Timothy", "1 Tim", "I Tim", "1 Ti",
            "1 Tm", "I Ti", "I Tm",
        ],
    ),
    (
        &[Book::SecondTimothy],
        &[
            "Second Timothy", "2nd Timothy", "II Timothy", "2 Timothy", "II Tim", "2 Tim", "II Ti",
            "II Tm", "2 Ti", "2 Tm",
        ],
    ),
    (&[Book::Titus], &["Titus", "Tit"]),
    (&[Book::Philemon], &["Philemon", "Philem", "Phlm", "Phm"]),
    (&[Book::Hebrews], &["Hebrews", "Heb"]),
    (&[Book::James], &["James", "Jas", "Jm"]),
    (
        &[Book::FirstPeter],
        &[
            "First Peter", "1st Peter", "1 Peter", "I Peter", "1 Pet", "I Pet", "1 Pt", "1 Pe",
            "I Pt", "I Pe",
        ],
    ),
    (
        &[Book::SecondPeter],
        &[
            "Second Peter", "2nd Peter", "II Peter", "2 Peter", "II Pet", "2 Pet", "II Pt", "II Pe",
            "2 Pt", "2 Pe",
        ],
    ),
    (
        &[Book::FirstJohn],
        &[
            "First John", "1st John", "1 John", "I John", "1 Jhn", "I Jhn", "1 Jn", "I Jn",
        ],
    ),
    (
        &[Book::SecondJohn],
        &[
            "Second John", "2nd John", "II John", "2 John", "II Jhn", "2 Jhn", "II Jn", "2 Jn",
        ],
    ),
    (
        &[Book::ThirdJohn],
        &[
            "Third John", "III John", "3rd John", "III Jhn", "3 John", "III Jn", "3 Jhn", "3 Jn",
        ],
    ),
    (&[Book::Jude], &["Jude"]),
    (
        &[Book::Revelation],
        &[
            "Revelation of John", "Revelations", "Revelation", "Apocalypse", "Rev", "Rv", "Re",
        ],
    ),
    (&[Book::Tobit], &["Tobit", "Tob", "Tb"]),
    (&[Book::Judith], &["Judith", "Jdth", "Jdt"]),
    (&[Book::GreekEsther], &["Additions to Esther", "Esther (Greek)", "Greek Esther", "GkEsth"]),
    (&[Book::Wisdom], &["Wisdom of Solomon", "Wisdom", "Wis", "Ws"]),
    (&[Book::Sirach], &["Ecclesiasticus", "Sirach", "Sir"]),
    (&[Book::Baruch], &["Baruch", "Bar"]),
    (&[Book::PrayerOfAzariah], &["Prayer of Azariah", "Azariah", "PrAzar"]),
    (&[Book::Susanna], &["Susanna", "Sus"]),
    (&[Book::BelAndTheDragon], &["Bel and the Dragon", "Bel"]),
    (
        &[Book::SongOfThree],
        &[
            "Song of the Three Young Men", "Song of the Three Children", "Song of Three", "SgThree",
        ],
    ),
    (&[Book::EpistleOfJeremiah], &["Epistle of Jeremiah", "Letter of Jeremiah", "EpJer"]),
    (
        &[Book::FirstMaccabees],
        &[
            "First Maccabees", "1st Maccabees", "1 Maccabees", "I Maccabees", "1 Macc", "I Macc",
            "1 Mac", "I Mac", "1 Mc", "I Mc",
        ],
    ),
    (
        &[Book::SecondMaccabees],
        &[
            "Second Maccabees", "2nd Maccabees", "II Maccabees", "2 Maccabees", "II Macc", "2 Macc",
            "II Mac", "2 Mac", "II Mc", "2 Mc",
        ],
    ),
    (
        &[Book::ThirdMaccabees],
        &[
            "Third Maccabees", "III Maccabees", "3rd Maccabees", "3 Maccabees", "III Macc",
            "III Mac", "3 Macc", "III Mc", "3 Mac", "3 Mc",
        ],
    ),
    (
        &[Book::FourthMaccabees],
        &[
            "Fourth Maccabees", "4th Maccabees", "IV Maccabees", "4 Maccabees", "IV Macc", "4 Macc",
            "IV Mac", "4 Mac", "IV Mc", "4 Mc",
        ],
    ),
    (
        &[Book::FirstEsdras],
        &[
            "First Esdras", "1st Esdras", "1 Esdras", "I Esdras", "1 Esd", "I Esd",
        ],
    ),
    (
        &[Book::SecondEsdras],
        &[
            "Second Esdras", "2nd Esdras", "II Esdras", "2 Esdras", "II Esd", "2 Esd",
        ],
    ),
    (&[Book::PrayerOfManasseh], &["Prayer of Manasseh", "Prayer of Manasses", "PrMan"]),
    (&[Book::Psalm151], &["Ps151"]),
    (&[Book::Judges, Book::Jude], &["Jud"]),
    (&[Book::Hebrews, Book::Habakkuk], &["Hb"]),
    (&[Book::Philippians, Book::Philemon], &["Ph"]),
];

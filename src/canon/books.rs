//! Per-language book tables.
//!
//! One structured record per book per language: ordinal, canonical display
//! name and the accepted abbreviation tokens. Abbreviations are stored
//! lowercase with no periods; compound ordinals are unspaced ("1corinthians").
//! The lists are curated to be unambiguous within a language.

/// One book's lexicon entry for a single language.
#[derive(Debug, Clone, Copy)]
pub struct BookEntry {
    /// Canonical book ordinal (1..=66).
    pub ordinal: u8,
    /// Canonical display name in this language.
    pub name: &'static str,
    /// Accepted abbreviation tokens, longest first by convention.
    pub abbreviations: &'static [&'static str],
}

/// English book names and abbreviation lexicon, in canonical order.
pub static BOOKS_EN: [BookEntry; 66] = [
    BookEntry { ordinal: 1, name: "Genesis", abbreviations: &["genesis", "ge", "gen"] },
    BookEntry { ordinal: 2, name: "Exodus", abbreviations: &["exodus", "ex", "exod"] },
    BookEntry { ordinal: 3, name: "Leviticus", abbreviations: &["leviticus", "le", "lev"] },
    BookEntry { ordinal: 4, name: "Numbers", abbreviations: &["numbers", "nu", "num"] },
    BookEntry { ordinal: 5, name: "Deuteronomy", abbreviations: &["deuteronomy", "de", "deut"] },
    BookEntry { ordinal: 6, name: "Joshua", abbreviations: &["joshua", "jos", "josh"] },
    BookEntry { ordinal: 7, name: "Judges", abbreviations: &["judges", "jg", "judg"] },
    BookEntry { ordinal: 8, name: "Ruth", abbreviations: &["ruth", "ru"] },
    BookEntry { ordinal: 9, name: "1 Samuel", abbreviations: &["1samuel", "1sa", "1sam"] },
    BookEntry { ordinal: 10, name: "2 Samuel", abbreviations: &["2samuel", "2sa", "2sam"] },
    BookEntry { ordinal: 11, name: "1 Kings", abbreviations: &["1kings", "1ki", "1kg"] },
    BookEntry { ordinal: 12, name: "2 Kings", abbreviations: &["2kings", "2ki", "2kg"] },
    BookEntry { ordinal: 13, name: "1 Chronicles", abbreviations: &["1chronicles", "1ch", "1chr"] },
    BookEntry { ordinal: 14, name: "2 Chronicles", abbreviations: &["2chronicles", "2ch", "2chr"] },
    BookEntry { ordinal: 15, name: "Ezra", abbreviations: &["ezra", "ezr"] },
    BookEntry { ordinal: 16, name: "Nehemiah", abbreviations: &["nehemiah", "ne", "nem"] },
    BookEntry { ordinal: 17, name: "Esther", abbreviations: &["esther", "es", "est"] },
    BookEntry { ordinal: 18, name: "Job", abbreviations: &["job", "jb"] },
    BookEntry { ordinal: 19, name: "Psalms", abbreviations: &["psalms", "ps", "psa"] },
    BookEntry { ordinal: 20, name: "Proverbs", abbreviations: &["proverbs", "pr", "pro", "prov"] },
    BookEntry { ordinal: 21, name: "Ecclesiastes", abbreviations: &["ecclesiastes", "ec", "ecc", "eccl"] },
    BookEntry { ordinal: 22, name: "Song of Solomon", abbreviations: &["song of solomon", "canticles", "ca", "sos", "sng", "song"] },
    BookEntry { ordinal: 23, name: "Isaiah", abbreviations: &["isaiah", "isa"] },
    BookEntry { ordinal: 24, name: "Jeremiah", abbreviations: &["jeremiah", "jer"] },
    BookEntry { ordinal: 25, name: "Lamentations", abbreviations: &["lamentations", "la", "lam"] },
    BookEntry { ordinal: 26, name: "Ezekiel", abbreviations: &["ezekiel", "eze"] },
    BookEntry { ordinal: 27, name: "Daniel", abbreviations: &["daniel", "da", "dan"] },
    BookEntry { ordinal: 28, name: "Hosea", abbreviations: &["hosea", "ho", "hos"] },
    BookEntry { ordinal: 29, name: "Joel", abbreviations: &["joel", "joe", "joel"] },
    BookEntry { ordinal: 30, name: "Amos", abbreviations: &["amos", "am", "amo", "amos"] },
    BookEntry { ordinal: 31, name: "Obadiah", abbreviations: &["obadiah", "ob", "oba"] },
    BookEntry { ordinal: 32, name: "Jonah", abbreviations: &["jonah", "jon"] },
    BookEntry { ordinal: 33, name: "Micah", abbreviations: &["micah", "mic"] },
    BookEntry { ordinal: 34, name: "Nahum", abbreviations: &["nahum", "na", "nah"] },
    BookEntry { ordinal: 35, name: "Habakkuk", abbreviations: &["habakkuk", "hab"] },
    BookEntry { ordinal: 36, name: "Zephaniah", abbreviations: &["zephaniah", "zep", "zeph"] },
    BookEntry { ordinal: 37, name: "Haggai", abbreviations: &["haggai", "hag"] },
    BookEntry { ordinal: 38, name: "Zechariah", abbreviations: &["zechariah", "zec", "zech"] },
    BookEntry { ordinal: 39, name: "Malachi", abbreviations: &["malachi", "mal"] },
    BookEntry { ordinal: 40, name: "Matthew", abbreviations: &["matthew", "mt", "mat", "matt"] },
    BookEntry { ordinal: 41, name: "Mark", abbreviations: &["mark", "mr", "mk", "mark"] },
    BookEntry { ordinal: 42, name: "Luke", abbreviations: &["luke", "lu", "luke"] },
    BookEntry { ordinal: 43, name: "John", abbreviations: &["john", "joh", "john"] },
    BookEntry { ordinal: 44, name: "Acts", abbreviations: &["acts", "ac", "act"] },
    BookEntry { ordinal: 45, name: "Romans", abbreviations: &["romans", "ro", "rom"] },
    BookEntry { ordinal: 46, name: "1 Corinthians", abbreviations: &["1corinthians", "1co", "1cor"] },
    BookEntry { ordinal: 47, name: "2 Corinthians", abbreviations: &["2corinthians", "2co", "2cor"] },
    BookEntry { ordinal: 48, name: "Galatians", abbreviations: &["galatians", "ga", "gal"] },
    BookEntry { ordinal: 49, name: "Ephesians", abbreviations: &["ephesians", "eph"] },
    BookEntry { ordinal: 50, name: "Philippians", abbreviations: &["philippians", "php"] },
    BookEntry { ordinal: 51, name: "Colossians", abbreviations: &["colossians", "col"] },
    BookEntry { ordinal: 52, name: "1 Thessalonians", abbreviations: &["1thessalonians", "1th"] },
    BookEntry { ordinal: 53, name: "2 Thessalonians", abbreviations: &["2thessalonians", "2th"] },
    BookEntry { ordinal: 54, name: "1 Timothy", abbreviations: &["1timothy", "1ti", "1tim"] },
    BookEntry { ordinal: 55, name: "2 Timothy", abbreviations: &["2timothy", "2ti", "2tim"] },
    BookEntry { ordinal: 56, name: "Titus", abbreviations: &["titus", "ti", "tit"] },
    BookEntry { ordinal: 57, name: "Philemon", abbreviations: &["philemon", "phm"] },
    BookEntry { ordinal: 58, name: "Hebrews", abbreviations: &["hebrews", "heb"] },
    BookEntry { ordinal: 59, name: "James", abbreviations: &["james", "jas"] },
    BookEntry { ordinal: 60, name: "1 Peter", abbreviations: &["1peter", "1pe", "1pet"] },
    BookEntry { ordinal: 61, name: "2 Peter", abbreviations: &["2peter", "2pe", "2pet"] },
    BookEntry { ordinal: 62, name: "1 John", abbreviations: &["1john", "1jo", "1joh"] },
    BookEntry { ordinal: 63, name: "2 John", abbreviations: &["2john", "2jo", "2joh"] },
    BookEntry { ordinal: 64, name: "3 John", abbreviations: &["3john", "3jo", "3joh"] },
    BookEntry { ordinal: 65, name: "Jude", abbreviations: &["jude", "jud", "jude"] },
    BookEntry { ordinal: 66, name: "Revelation", abbreviations: &["revelation", "re", "rev"] },
];

/// French book names and abbreviation lexicon, in canonical order.
pub static BOOKS_FR: [BookEntry; 66] = [
    BookEntry { ordinal: 1, name: "Genèse", abbreviations: &["genèse", "gen", "ge"] },
    BookEntry { ordinal: 2, name: "Exode", abbreviations: &["exode", "exo", "ex"] },
    BookEntry { ordinal: 3, name: "Lévitique", abbreviations: &["lévitique", "lev", "le"] },
    BookEntry { ordinal: 4, name: "Nombres", abbreviations: &["nombres", "nom"] },
    BookEntry { ordinal: 5, name: "Deutéronome", abbreviations: &["deutéronome", "de", "deu", "deut"] },
    BookEntry { ordinal: 6, name: "Josué", abbreviations: &["josué", "jos"] },
    BookEntry { ordinal: 7, name: "Juges", abbreviations: &["juges", "jug"] },
    BookEntry { ordinal: 8, name: "Ruth", abbreviations: &["ruth", "ru"] },
    BookEntry { ordinal: 9, name: "1 Samuel", abbreviations: &["1samuel", "1sam", "1sa"] },
    BookEntry { ordinal: 10, name: "2 Samuel", abbreviations: &["2samuel", "1sam", "2sa"] },
    BookEntry { ordinal: 11, name: "1 Rois", abbreviations: &["1rois", "1ro"] },
    BookEntry { ordinal: 12, name: "2 Rois", abbreviations: &["2rois", "2ro"] },
    BookEntry { ordinal: 13, name: "1 Chroniques", abbreviations: &["1chroniques", "1chr", "1ch"] },
    BookEntry { ordinal: 14, name: "2 Chroniques", abbreviations: &["2chroniques", "2chr", "2ch"] },
    BookEntry { ordinal: 15, name: "Esdras", abbreviations: &["esdras", "esd"] },
    BookEntry { ordinal: 16, name: "Néhémie", abbreviations: &["néhémie", "neh"] },
    BookEntry { ordinal: 17, name: "Esther", abbreviations: &["esther", "est"] },
    BookEntry { ordinal: 18, name: "Job", abbreviations: &["job"] },
    BookEntry { ordinal: 19, name: "Psaumes", abbreviations: &["psaumes", "psa", "ps"] },
    BookEntry { ordinal: 20, name: "Proverbes", abbreviations: &["proverbes", "pr", "pro", "prov"] },
    BookEntry { ordinal: 21, name: "Ecclésiaste", abbreviations: &["ecclésiaste", "ec", "ecc", "eccl"] },
    BookEntry { ordinal: 22, name: "Chant de Salomon", abbreviations: &["chant de salomon", "chant"] },
    BookEntry { ordinal: 23, name: "Isaïe", abbreviations: &["isaïe", "isa", "is"] },
    BookEntry { ordinal: 24, name: "Jérémie", abbreviations: &["jérémie", "jer"] },
    BookEntry { ordinal: 25, name: "Lamentations", abbreviations: &["lamentations", "lam", "la"] },
    BookEntry { ordinal: 26, name: "Ézéchiel", abbreviations: &["ézéchiel", "eze", "ez"] },
    BookEntry { ordinal: 27, name: "Daniel", abbreviations: &["daniel", "dan", "da"] },
    BookEntry { ordinal: 28, name: "Osée", abbreviations: &["osée", "os"] },
    BookEntry { ordinal: 29, name: "Joël", abbreviations: &["joël"] },
    BookEntry { ordinal: 30, name: "Amos", abbreviations: &["amos"] },
    BookEntry { ordinal: 31, name: "Abdias", abbreviations: &["abdias", "abd", "ab"] },
    BookEntry { ordinal: 32, name: "Jonas", abbreviations: &["jonas"] },
    BookEntry { ordinal: 33, name: "Michée", abbreviations: &["michée", "mic"] },
    BookEntry { ordinal: 34, name: "Nahum", abbreviations: &["nahum"] },
    BookEntry { ordinal: 35, name: "Habacuc", abbreviations: &["habacuc", "hab"] },
    BookEntry { ordinal: 36, name: "Sophonie", abbreviations: &["sophonie", "sph", "sop"] },
    BookEntry { ordinal: 37, name: "Aggée", abbreviations: &["aggée", "agg", "ag"] },
    BookEntry { ordinal: 38, name: "Zacharie", abbreviations: &["zacharie", "zac"] },
    BookEntry { ordinal: 39, name: "Malachie", abbreviations: &["malachie", "mal"] },
    BookEntry { ordinal: 40, name: "Matthieu", abbreviations: &["matthieu", "mt", "mat", "matt"] },
    BookEntry { ordinal: 41, name: "Marc", abbreviations: &["marc"] },
    BookEntry { ordinal: 42, name: "Luc", abbreviations: &["luc"] },
    BookEntry { ordinal: 43, name: "Jean", abbreviations: &["jean"] },
    BookEntry { ordinal: 44, name: "Actes", abbreviations: &["actes", "ac"] },
    BookEntry { ordinal: 45, name: "Romains", abbreviations: &["romains", "rom", "ro"] },
    BookEntry { ordinal: 46, name: "1 Corinthiens", abbreviations: &["1corinthiens", "1cor", "1co"] },
    BookEntry { ordinal: 47, name: "2 Corinthiens", abbreviations: &["2corinthiens", "2cor", "2co"] },
    BookEntry { ordinal: 48, name: "Galates", abbreviations: &["galates", "gal", "ga"] },
    BookEntry { ordinal: 49, name: "Éphésiens", abbreviations: &["éphésiens", "eph"] },
    BookEntry { ordinal: 50, name: "Philippiens", abbreviations: &["philippiens", "phil"] },
    BookEntry { ordinal: 51, name: "Colossiens", abbreviations: &["colossiens", "col"] },
    BookEntry { ordinal: 52, name: "1 Thessaloniciens", abbreviations: &["1thessaloniciens", "1th"] },
    BookEntry { ordinal: 53, name: "2 Thessaloniciens", abbreviations: &["2thessaloniciens", "2th"] },
    BookEntry { ordinal: 54, name: "1 Timothée", abbreviations: &["1timothée", "1tim", "1ti"] },
    BookEntry { ordinal: 55, name: "2 Timothée", abbreviations: &["2timothée", "2tim", "2ti"] },
    BookEntry { ordinal: 56, name: "Tite", abbreviations: &["tite"] },
    BookEntry { ordinal: 57, name: "Philémon", abbreviations: &["philémon", "phm"] },
    BookEntry { ordinal: 58, name: "Hébreux", abbreviations: &["hébreux", "heb", "he"] },
    BookEntry { ordinal: 59, name: "Jacques", abbreviations: &["jacques", "jac"] },
    BookEntry { ordinal: 60, name: "1 Pierre", abbreviations: &["1pierre", "1pi"] },
    BookEntry { ordinal: 61, name: "2 Pierre", abbreviations: &["2pierre", "2pi"] },
    BookEntry { ordinal: 62, name: "1 Jean", abbreviations: &["1jean", "1je"] },
    BookEntry { ordinal: 63, name: "2 Jean", abbreviations: &["2jean", "2je"] },
    BookEntry { ordinal: 64, name: "3 Jean", abbreviations: &["3jean", "3", "je"] },
    BookEntry { ordinal: 65, name: "Jude", abbreviations: &["jude"] },
    BookEntry { ordinal: 66, name: "Révélation", abbreviations: &["révélation", "rev", "re"] },
];

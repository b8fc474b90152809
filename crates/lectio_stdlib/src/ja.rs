//! Japanese book names.

use lectio_foundation::Book;
use lectio_language::{Keyword, Keywords};

use crate::table::LanguageTable;

/// The Japanese table.
pub static TABLE: LanguageTable = LanguageTable {
    code: "ja",
    books: BOOKS,
    translations: TRANSLATIONS,
    keywords,
};

fn keywords() -> Keywords {
    Keywords::english()
        .with(Keyword::Chapter, &["章"])
        .with(Keyword::Verse, &["節"])
}

const TRANSLATIONS: &[(&str, &[&str])] = &[
    ("JLB", &["JLB"]),
    ("口語訳", &["口語訳"]),
    ("新共同訳", &["新共同訳"]),
    ("新改訳", &["新改訳"]),
];

const BOOKS: &[(&[Book], &[&str])] = &[
    (&[Book::Genesis], &["創世記", "創世", "創"]),
    (
        &[Book::Exodus],
        &[
            "出エシフト記", "出エシプト記", "出エジフト記", "出エジプト記", "出エシフト", "出エシプト", "出エジフト", "出エジプト", "出",
        ],
    ),
    (&[Book::Leviticus], &["レヒ記", "レビ記", "レヒ", "レビ"]),
    (&[Book::Numbers], &["民数記", "民数", "民"]),
    (&[Book::Deuteronomy], &["申命記", "申命", "申"]),
    (&[Book::Joshua], &["ヨシュア記", "ヨシュア"]),
    (&[Book::Judges], &["士師記", "士師", "士"]),
    (&[Book::Ruth], &["ルツ記", "ルツ"]),
    (&[Book::FirstSamuel], &["サムエル 1", "サムエル前書", "サムエル記Ⅰ", "サムエル記上", "列王記第一巻", "Ⅰサムエル", "サムエル上"]),
    (&[Book::SecondSamuel], &["サムエル 2", "サムエル後書", "サムエル記Ⅱ", "サムエル記下", "列王記第二巻", "Ⅱサムエル", "サムエル下"]),
    (&[Book::FirstKings], &["列王記第三巻", "列王紀略上", "列王 1", "列王紀上", "列王記Ⅰ", "列王記上", "Ⅰ列王", "列上"]),
    (&[Book::SecondKings], &["列王記第四巻", "列王紀略下", "列王 2", "列王紀下", "列王記Ⅱ", "列王記下", "Ⅱ列王", "列下"]),
    (&[Book::FirstChronicles], &["歴代志略上", "歴代誌 1", "歴代史上", "歴代志上", "歴代誌Ⅰ", "歴代誌上", "Ⅰ歴代", "歴上"]),
    (&[Book::SecondChronicles], &["歴代志略下", "歴代誌 2", "歴代史下", "歴代志下", "歴代誌Ⅱ", "歴代誌下", "Ⅱ歴代", "歴下"]),
    (&[Book::Ezra], &["エスラ書", "エスラ記", "エズラ書", "エズラ記", "エスラ", "エズラ"]),
    (&[Book::Nehemiah], &["ネヘミヤ 記", "ネヘミヤ記", "ネヘミヤ"]),
    (&[Book::Esther], &["エステル 記", "エステル書", "エステル記", "エステル"]),
    (&[Book::Job], &["ヨフ 記", "ヨブ 記", "ヨフ記", "ヨブ記", "ヨフ", "ヨブ"]),
    (&[Book::Psalms], &["詩篇/聖詠", "詩篇", "詩編", "詩"]),
    (&[Book::Proverbs], &["箴言 知恵の泉", "格言の書", "箴言", "格"]),
    (
        &[Book::Ecclesiastes],
        &[
            "コヘレトのことは", "コヘレトのことば", "コヘレトの言葉", "伝道者の書", "コヘレト", "伝道の書", "伝道者の", "傳道之書",
        ],
    ),
    (&[Book::SongOfSongs], &["諸歌の歌", "雅歌", "雅"]),
    (&[Book::Isaiah], &["イサヤ書", "イザヤ書", "イサヤ", "イザヤ"]),
    (&[Book::Jeremiah], &["エレミヤ書", "ヱレミヤ記", "エレミヤ"]),
    (&[Book::Lamentations], &["エレミヤの哀歌", "哀歌", "哀"]),
    (&[Book::Ezekiel], &["エセキエル書", "エゼキエル書", "エセキエル", "エゼキエル"]),
    (&[Book::Daniel], &["タニエル書", "ダニエル書", "タニエル", "ダニエル"]),
    (&[Book::Hosea], &["ホセアしょ", "ホセア書", "ホセア"]),
    (&[Book::Joel], &["よえるしょ", "ヨエル書", "ヨエル"]),
    (&[Book::Amos], &["アモスしょ", "アモス書", "アモス"]),
    (
        &[Book::Obadiah],
        &[
            "オハテヤしょ", "オハデヤしょ", "オバテヤしょ", "オバデヤしょ", "オハテア書", "オハテヤ書", "オハデア書", "オハデヤ書", "オバテア書",
            "オバテヤ書", "オバデア書", "オバデヤ書", "オハテヤ", "オハデヤ", "オバテヤ", "オバデヤ", "オハ", "オバ",
        ],
    ),
    (&[Book::Jonah], &["ヨナしょ", "ヨナ書", "ヨナ"]),
    (&[Book::Micah], &["ミカしょ", "ミカ書", "ミカ"]),
    (&[Book::Nahum], &["ナホムしょ", "ナホム書", "ナホム"]),
    (&[Book::Habakkuk], &["ハハククしょ", "ハバククしょ", "ハハクク書", "ハバクク書", "ハハクク", "ハバクク"]),
    (
        &[Book::Zephaniah],
        &[
            "セファニヤしょ", "ゼファニヤしょ", "セファニア書", "セファニヤ書", "ゼファニア書", "ゼファニヤ書", "セハニヤ書", "セパニヤ書",
            "セファニア", "ゼハニヤ書", "ゼパニヤ書", "ゼファニア", "セハニヤ", "セパニヤ", "ゼハニヤ", "ゼパニヤ", "セファ", "ゼファ",
        ],
    ),
    (&[Book::Haggai], &["ハカイしょ", "ハガイしょ", "ハカイ書", "ハガイ書", "ハカイ", "ハガイ"]),
    (&[Book::Zechariah], &["セカリヤしょ", "ゼカリヤしょ", "セカリヤ書", "ゼカリヤ書", "セカリヤ", "ゼカリヤ"]),
    (&[Book::Malachi], &["マラキ書", "マラキ", "マラ"]),
    (&[Book::Matthew], &["マタイによる福音書", "マタイの福音書", "マタイ傳福音書", "マタイ福音書", "マタイ伝", "マタイ書", "マタイ"]),
    (&[Book::Mark], &["マルコによる福音書", "マルコの福音書", "マルコ傳福音書", "マルコ福音書", "マルコ伝", "マルコ書", "マルコ"]),
    (&[Book::Luke], &["ルカによる福音書", "ルカの福音書", "ルカ傳福音書", "ルカ福音書", "ルカ伝", "ルカ書", "ルカ"]),
    (&[Book::John], &["ヨハネによる福音書", "ヨハネの福音書", "ヨハネ傳福音書", "ヨハネ福音書", "ヨハネ伝", "ヨハネ"]),
    (&[Book::Acts], &["使徒の活動記録", "使徒の働き", "使徒言行録", "使徒行伝", "使徒行傳", "使徒行録", "使徒書", "使徒"]),
    (&[Book::Romans], &["ローマの信徒への手紙", "ローマ人への手紙", "ロマ人への書", "ローマ人へ", "ローマ書", "ローマ"]),
    (
        &[Book::FirstCorinthians],
        &[
            "コリントの信徒への手紙一", "コリント人への第一の手紙", "コリント人への前の書", "コリント人への手紙Ⅰ", "コリント人への手紙一",
            "Ⅰ コリント人へ", "コリント 1", "コリント前書", "1コリント",
        ],
    ),
    (
        &[Book::SecondCorinthians],
        &[
            "コリントの信徒への手紙二", "コリント人への第二の手紙", "コリント人への後の書", "コリント人への手紙Ⅱ", "コリント人への手紙二",
            "Ⅱ コリント人へ", "コリント 2", "コリント後書", "2コリント",
        ],
    ),
    (
        &[Book::Galatians],
        &[
            "カラテヤの信徒への手紙", "ガラテヤの信徒への手紙", "カラテヤ人への手紙", "ガラテヤ人への手紙", "カラテヤ人への書", "ガラテヤ人への書",
            "カラテヤ人へ", "ガラテヤ人へ", "カラテヤ書", "ガラテヤ書", "カラテヤ", "ガラテヤ",
        ],
    ),
    (
        &[Book::Ephesians],
        &[
            "エフェソの信徒への手紙", "エフェソ人への手紙", "エヘソ人への手紙", "エペソ人への手紙", "エヘソ人への書", "エペソ人への書", "エフェソ書",
            "エヘソ人へ", "エペソ人へ", "エフェソ", "エヘソ書", "エペソ書", "エヘソ", "エペソ",
        ],
    ),
    (
        &[Book::Philippians],
        &[
            "フィリヒの信徒への手紙", "フィリピの信徒への手紙", "フィリヒ人への手紙", "フィリピ人への手紙", "ヒリヒ人への手紙", "ヒリピ人への手紙",
            "ピリヒ人への手紙", "ピリピ人への手紙", "ヒリヒ人への書", "ヒリピ人への書", "ピリヒ人への書", "ピリピ人への書", "ヒリヒ人へ",
            "ヒリピ人へ", "ピリヒ人へ", "ピリピ人へ", "フィリヒ書", "フィリピ書", "ヒリヒ書", "ヒリピ書", "ピリヒ書", "ピリピ書", "フィリヒ",
            "フィリピ", "ヒリヒ", "ヒリピ", "ピリヒ", "ピリピ",
        ],
    ),
    (&[Book::Colossians], &["コロサイの信徒への手紙", "コロサイ人への手紙", "コロサイ人への書", "コロサイ人へ", "コロサイ書", "コロサイ"]),
    (
        &[Book::FirstThessalonians],
        &[
            "テサロニケの信徒への手紙一", "テサロニケ人への第一の手紙", "テサロニケ人への前の書", "テサロニケ人への手紙Ⅰ", "テサロニケ人への手紙一",
            "Ⅰ テサロニケ人へ", "テサロニケ 1", "テサロニケ前書", "1テサロニケ",
        ],
    ),
    (
        &[Book::SecondThessalonians],
        &[
            "テサロニケの信徒への手紙二", "テサロニケ人への第二の手紙", "テサロニケ人への後の書", "テサロニケ人への手紙Ⅱ", "テサロニケ人への手紙二",
            "Ⅱ テサロニケ人へ", "テサロニケ 2", "テサロニケ後書", "2テサロニケ",
        ],
    ),
    (
        &[Book::FirstTimothy],
        &[
            "テモテヘの第一の手紙", "テモテへの前の書", "テモテへの手紙Ⅰ", "テモテへの手紙一", "Ⅰ テモテへ", "テモテ 1", "テモテ前書",
            "1テモテ", "一テモテ",
        ],
    ),
    (
        &[Book::SecondTimothy],
        &[
            "テモテヘの第二の手紙", "テモテへの後の書", "テモテへの手紙Ⅱ", "テモテへの手紙二", "Ⅱ テモテへ", "テモテ 2", "テモテ後書",
            "2テモテ", "二テモテ",
        ],
    ),
    (
        &[Book::Titus],
        &[
            "ティトに達する書", "テトスへのてかみ", "テトスへのてがみ", "テトスへの手紙", "テトスヘの手紙", "テトスへの書", "テトスへ", "テトス書",
            "テトス",
        ],
    ),
    (
        &[Book::Philemon],
        &[
            "フィレモンへの手紙", "ヒレモンへの手紙", "ヒレモンヘの手紙", "ピレモンへの手紙", "ピレモンヘの手紙", "ヒレモンへの書", "ピレモンへの書",
            "フィレモン書", "ヒレモンへ", "ヒレモン書", "ピレモンへ", "ピレモン書", "フィレモン", "ヒレモン", "ピレモン",
        ],
    ),
    (
        &[Book::Hebrews],
        &[
            "ヘフライ人への手紙", "ヘブライ人への手紙", "へフル人への手紙", "へブル人への手紙", "ヘフル人への手紙", "ヘブル人への手紙", "ヘフル人への書",
            "ヘブル人への書", "ヘフライ書", "ヘフル人へ", "ヘブライ書", "ヘブル人へ", "ヘフライ", "ヘフル書", "ヘブライ", "ヘブル書",
            "へフル", "へブル",
        ],
    ),
    (
        &[Book::James],
        &[
            "ヤコフからの手紙", "ヤコブからの手紙", "ヤコフの手紙", "ヤコブの手紙", "ヤコフの書", "ヤコブの書", "ヤコフ書", "ヤコブ書", "ヤコフ",
            "ヤコブ",
        ],
    ),
    (
        &[Book::FirstPeter],
        &[
            "ヘテロの第一の手紙", "ヘトロの第一の手紙", "ペテロの第一の手紙", "ペトロの第一の手紙", "ヘテロの前の書", "ヘテロの手紙Ⅰ", "ヘトロの手紙一",
            "ペテロの前の書", "ペテロの手紙Ⅰ", "ペトロの手紙一", "Ⅰ ヘテロ", "Ⅰ ペテロ", "ヘトロ 1", "ペトロ 1", "1ヘテロ", "1ペテロ",
            "一ヘトロ", "一ペトロ",
        ],
    ),
    (
        &[Book::SecondPeter],
        &[
            "ヘテロの第二の手紙", "ヘトロの第二の手紙", "ペテロの第二の手紙", "ペトロの第二の手紙", "ヘテロの後の書", "ヘテロの手紙Ⅱ", "ヘトロの手紙二",
            "ペテロの後の書", "ペテロの手紙Ⅱ", "ペトロの手紙二", "Ⅱ ヘテロ", "Ⅱ ペテロ", "ヘトロ 2", "ペトロ 2", "2ヘテロ", "2ペテロ",
            "二ヘトロ", "二ペトロ",
        ],
    ),
    (&[Book::FirstJohn], &["ヨハネの第一の手紙", "ヨハネの第一の書", "ヨハネの手紙Ⅰ", "ヨハネの手紙一", "Ⅰ ヨハネ", "1ヨハネ", "一ヨハネ"]),
    (
        &[Book::SecondJohn],
        &[
            "ヨハネの第二の手紙", "ヨハネの第二の書", "ヨハネの手紙Ⅱ", "ヨハネの手紙二", "Ⅱ ヨハネ", "2ヨハネ", "二ヨハネ",
        ],
    ),
    (&[Book::ThirdJohn], &["ヨハネの第三の手紙", "ヨハネの第三の書", "ヨハネの手紙Ⅲ", "ヨハネの手紙三", "Ⅲ ヨハネ", "3ヨハネ", "三ヨハネ"]),
    (&[Book::Jude], &["ユタからの手紙", "ユダからの手紙", "ユタの手紙", "ユダの手紙", "ユタの書", "ユダの書", "ユタ", "ユダ"]),
    (&[Book::Revelation], &["ヨハネの默示録", "ヨハネの黙示録", "黙示録"]),
    (&[Book::Tobit], &["トヒト書", "トヒト記", "トビト書", "トビト記", "トヒト", "トビト"]),
    (&[Book::Judith], &["ユティト記", "ユディト記", "ユティト", "ユテト書", "ユディト", "ユデト書"]),
    (&[Book::GreekEsther], &["エステル書殘篇", "エステル記補遺"]),
    (&[Book::Wisdom], &["ソロモンの知恵書", "ソロモンの智慧", "知恵の書", "知恵", "知"]),
    (
        &[Book::Sirach],
        &[
            "シラフの子イイススの知恵書", "シラ書（集会の書）", "ヘン・シラの智慧", "ヘン・シラの知恵", "ベン・シラの智慧", "ベン・シラの知恵",
            "集会の書", "シラ書", "シラ",
        ],
    ),
    (&[Book::Baruch], &["ワルフの預言書", "ハルク書", "バルク書", "ハルク", "バルク"]),
    (&[Book::PrayerOfAzariah], &["アサルヤの祈り", "アザルヤの祈り"]),
    (&[Book::Susanna], &["スサンナ物語", "スザンナ物語", "スサンナ", "スザンナ"]),
    (&[Book::BelAndTheDragon], &["ヘルと竜", "ヘルと龍", "ベルと竜", "ベルと龍"]),
    (&[Book::SongOfThree], &["三人の若者の賛歌", "三童兒の歌"]),
    (&[Book::EpistleOfJeremiah], &["イエレミヤの達書", "エレミヤの手紙", "エレミヤの書翰", "エレミヤ・手"]),
    (
        &[Book::FirstMaccabees],
        &[
            "マカヒー第一書", "マカビー第一書", "マカハイ 1", "マカハイ記1", "マカハイ記上", "マカバイ 1", "マカバイ記1", "マカバイ記上",
            "マカハイ上", "マカバイ上",
        ],
    ),
    (
        &[Book::SecondMaccabees],
        &[
            "マカヒー第二書", "マカビー第二書", "マカハイ 2", "マカハイ記2", "マカハイ記下", "マカバイ 2", "マカバイ記2", "マカバイ記下",
            "マカハイ下", "マカバイ下",
        ],
    ),
    (&[Book::ThirdMaccabees], &["マカヒー第三書", "マカビー第三書", "マカハイ 3", "マカハイ記3", "マカバイ 3", "マカバイ記3"]),
    (&[Book::FourthMaccabees], &["マカヒー第四書", "マカビー第四書", "マカハイ 4", "マカハイ記4", "マカバイ 4", "マカバイ記4"]),
    (&[Book::FirstEsdras], &["エストラ第一巻", "エスドラ第一巻", "エズトラ第一巻", "エズドラ第一巻", "エスラ第一書", "エズラ第一書"]),
    (&[Book::SecondEsdras], &["エストラ第二巻", "エスドラ第二巻", "エズトラ第二巻", "エズドラ第二巻", "エスラ第二書", "エズラ第二書"]),
    (&[Book::PrayerOfManasseh], &["マナセのいのり", "マナセの祈り", "マナセの祈禱"]),
];

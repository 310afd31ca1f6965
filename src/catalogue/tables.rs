//! Hand-curated vocabulary tables.
//!
//! These mirror the data used by the learning app itself, so that generated
//! audio filenames line up with the identifiers the app references. Entry
//! order matters: index-range selection slices by position, and reordering
//! would silently change what `--start`/`--end` select.

use super::category::Category;

/// Hiragana characters, keyed by romanization.
pub(super) const HIRAGANA: &[(&str, &str)] = &[
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("sa", "さ"), ("shi", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("ta", "た"), ("chi", "ち"), ("tsu", "つ"), ("te", "て"), ("to", "と"),
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("ha", "は"), ("hi", "ひ"), ("fu", "ふ"), ("he", "へ"), ("ho", "ほ"),
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("wa", "わ"), ("wo", "を"), ("n", "ん"),
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
    ("za", "ざ"), ("ji", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
    ("da", "だ"), ("dji", "ぢ"), ("dzu", "づ"), ("de", "で"), ("do", "ど"),
    ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
    ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
];

/// Katakana characters, keyed by upper-case romanization.
///
/// `N_k` for ン is historical: the shipped asset set names the file
/// `k_N_k.mp3`, so the key is kept verbatim.
pub(super) const KATAKANA: &[(&str, &str)] = &[
    ("A", "ア"), ("I", "イ"), ("U", "ウ"), ("E", "エ"), ("O", "オ"),
    ("KA", "カ"), ("KI", "キ"), ("KU", "ク"), ("KE", "ケ"), ("KO", "コ"),
    ("SA", "サ"), ("SHI", "シ"), ("SU", "ス"), ("SE", "セ"), ("SO", "ソ"),
    ("TA", "タ"), ("CHI", "チ"), ("TSU", "ツ"), ("TE", "テ"), ("TO", "ト"),
    ("NA", "ナ"), ("NI", "ニ"), ("NU", "ヌ"), ("NE", "ネ"), ("NO", "ノ"),
    ("HA", "ハ"), ("HI", "ヒ"), ("FU", "フ"), ("HE", "ヘ"), ("HO", "ホ"),
    ("MA", "マ"), ("MI", "ミ"), ("MU", "ム"), ("ME", "メ"), ("MO", "モ"),
    ("YA", "ヤ"), ("YU", "ユ"), ("YO", "ヨ"),
    ("RA", "ラ"), ("RI", "リ"), ("RU", "ル"), ("RE", "レ"), ("RO", "ロ"),
    ("WA", "ワ"), ("WO", "ヲ"), ("N_k", "ン"),
    ("GA", "ガ"), ("GI", "ギ"), ("GU", "グ"), ("GE", "ゲ"), ("GO", "ゴ"),
    ("ZA", "ザ"), ("JI", "ジ"), ("ZU", "ズ"), ("ZE", "ゼ"), ("ZO", "ゾ"),
    ("DA", "ダ"), ("DJI", "ヂ"), ("DZU", "ヅ"), ("DE", "デ"), ("DO", "ド"),
    ("BA", "バ"), ("BI", "ビ"), ("BU", "ブ"), ("BE", "ベ"), ("BO", "ボ"),
    ("PA", "パ"), ("PI", "ピ"), ("PU", "プ"), ("PE", "ペ"), ("PO", "ポ"),
];

/// Numbers 1-100 (the subset the app teaches), keyed by reading.
pub(super) const NUMBERS: &[(&str, &str)] = &[
    ("ichi", "一"), ("ni", "二"), ("san", "三"), ("shi", "四"), ("go", "五"),
    ("roku", "六"), ("shichi", "七"), ("hachi", "八"), ("kyuu", "九"), ("juu", "十"),
    ("juuichi", "十一"), ("juuni", "十二"), ("juusan", "十三"), ("juushi", "十四"),
    ("juugo", "十五"), ("juuroku", "十六"), ("juushichi", "十七"), ("juuhachi", "十八"),
    ("juukyuu", "十九"), ("nijuu", "二十"),
    ("nijuuichi", "二十一"), ("nijuuni", "二十二"), ("nijuusan", "二十三"),
    ("nijuushi", "二十四"), ("nijuugo", "二十五"), ("nijuuroku", "二十六"),
    ("nijuushichi", "二十七"), ("nijuuhachi", "二十八"), ("nijuukyuu", "二十九"),
    ("sanjuu", "三十"),
    ("yonjuu", "四十"), ("gojuu", "五十"), ("rokujuu", "六十"), ("nanajuu", "七十"),
    ("hachijuu", "八十"), ("kyuujuu", "九十"), ("hyaku", "百"),
];

/// Single-kanji readings, keyed by romanization.
///
/// `ta_eat` / `no_drink` disambiguate readings that would otherwise collide
/// with `ta` 田 and `no` の within the category.
pub(super) const KANJI: &[(&str, &str)] = &[
    ("ichi", "一"), ("ni", "二"), ("san", "三"), ("shi", "四"), ("go", "五"),
    ("roku", "六"), ("shichi", "七"), ("hachi", "八"), ("kyuu", "九"), ("juu", "十"),
    ("hyaku", "百"), ("sen", "千"), ("man", "万"), ("en", "円"), ("ji", "時"),
    ("nichi", "日"), ("getsu", "月"), ("ka", "火"), ("sui", "水"), ("moku", "木"),
    ("kin", "金"), ("do", "土"), ("you", "曜"), ("ue", "上"), ("shita", "下"),
    ("naka", "中"), ("han", "半"), ("yama", "山"), ("kawa", "川"), ("gen", "元"),
    ("ki", "気"), ("ten", "天"), ("watashi", "私"), ("ima", "今"), ("ta", "田"),
    ("onna", "女"), ("otoko", "男"), ("mi", "見"), ("i", "行"),
    ("ta_eat", "食"), ("no_drink", "飲"),
];

/// Everyday vocabulary, keyed by romanization.
pub(super) const WORDS: &[(&str, &str)] = &[
    ("hito", "人"), ("otoko", "男"), ("onna", "女"), ("kazoku", "家族"),
    ("nihon", "日本"), ("tokyo", "東京"), ("mise", "店"),
    ("tabemono", "食べ物"), ("nomimono", "飲み物"), ("gohan", "ご飯"), ("pan", "パン"),
    ("mizu", "水"), ("ocha", "お茶"), ("gyuunyuu", "牛乳"),
    ("ie", "家"), ("heya", "部屋"), ("isu", "椅子"), ("tsukue", "机"),
    ("hon", "本"), ("enpitsu", "鉛筆"), ("tokei", "時計"),
    ("kyou", "今日"), ("ashita", "明日"), ("kinou", "昨日"), ("jikan", "時間"),
    ("tenki", "天気"), ("ame", "雨"), ("hare", "晴れ"),
    ("mimasu", "見ます"), ("tabemasu", "食べます"), ("nomimasu", "飲みます"),
    ("kaimasu", "買います"), ("ikimasu", "行きます"), ("kaerimasu", "帰ります"),
    ("yomimasu", "読みます"), ("kakimasu", "書きます"), ("kikimasu", "聞きます"),
    ("hanashimasu", "話します"), ("nemasu", "寝ます"), ("okimasu", "起きます"),
    ("atarashii", "新しい"), ("furui", "古い"), ("ii", "良い"), ("warui", "悪い"),
    ("ookii", "大きい"), ("chiisai", "小さい"),
    ("takai", "高い"), ("yasui", "安い"), ("omoshiroi", "面白い"),
    ("oishii", "美味しい"), ("isogashii", "忙しい"), ("tanoshii", "楽しい"),
    ("genki", "元気"), ("kirei", "綺麗"), ("shinsetsu", "親切"),
    ("yuumei", "有名"), ("benri", "便利"), ("suki", "好き"),
    ("atama", "頭"), ("kao", "顔"), ("me", "目"), ("mimi", "耳"),
    ("hana", "鼻"), ("kuchi", "口"), ("te", "手"), ("ashi", "足"),
    ("densha", "電車"), ("kuruma", "車"), ("hikouki", "飛行機"),
    ("chikatetsu", "地下鉄"), ("eki", "駅"), ("kuukou", "空港"),
    ("shigoto", "仕事"), ("denwa", "電話"), ("eiga", "映画"),
    ("ongaku", "音楽"), ("shashin", "写真"), ("tomodachi", "友達"),
];

/// Common phrases and sentences, keyed by romanized phrase.
///
/// `...` in the spoken text marks a fill-in-the-blank slot ("your name
/// here"); the normalizer substitutes a pause before synthesis.
pub(super) const SENTENCES: &[(&str, &str)] = &[
    ("ohayou gozaimasu", "おはようございます"),
    ("konnichiwa", "こんにちは"),
    ("konbanwa", "こんばんは"),
    ("sayounara", "さようなら"),
    ("oyasuminasai", "おやすみなさい"),
    ("arigatou gozaimasu", "ありがとうございます"),
    ("sumimasen", "すみません"),
    ("gomennasai", "ごめんなさい"),
    ("onegaishimasu", "お願いします"),
    ("hajimemashite", "はじめまして"),
    ("watashi no namae wa ... desu", "私の名前は...です"),
    ("douzo yoroshiku", "どうぞよろしく"),
    ("ogenki desu ka", "お元気ですか"),
    ("kore wa nan desu ka", "これは何ですか"),
    ("ima nanji desu ka", "今何時ですか"),
    ("doko desu ka", "どこですか"),
    ("ikura desu ka", "いくらですか"),
    ("doushite desu ka", "どうしてですか"),
    ("menyuu o kudasai", "メニューをください"),
    ("okanjou o onegaishimasu", "お勘定をお願いします"),
    ("oishikatta desu", "美味しかったです"),
    ("kore o kudasai", "これをください"),
    ("shichaku shite mo ii desu ka", "試着してもいいですか"),
    ("kurejittokaado wa tsukaemasu ka", "クレジットカードは使えますか"),
    ("eki wa doko desu ka", "駅はどこですか"),
    ("massugu itte kudasai", "まっすぐ行ってください"),
    ("migi ni magatte kudasai", "右に曲がってください"),
    ("watashi wa neko ga suki desu", "私は猫が好きです"),
    ("watashi wa burokkorii ga kirai desu", "私はブロッコリーが嫌いです"),
    ("kono hon wa omoshiroi desu", "この本は面白いです"),
    ("sono kuruma wa takai desu", "その車は高いです"),
    ("ashita eiga o mi ni ikimasu", "明日映画を見に行きます"),
    ("shuumatsu ni nani o shimasu ka", "週末に何をしますか"),
];

/// Grammar conjugation examples, keyed by romanized phrase. Unprefixed;
/// the keys are unique free-form identifiers the app references directly.
pub(super) const GRAMMAR: &[(&str, &str)] = &[
    ("Watashi wa ringo o tabemasu", "私はリンゴを食べます"),
    ("yomimasu", "読みます"),
    ("tabemasu", "食べます"),
    ("shimasu", "します"),
    ("atarashii", "新しい"),
    ("atarashikunai", "新しくない"),
    ("atarashikatta", "新しかった"),
    ("kirei desu", "きれいです"),
    ("kirei janai desu", "きれいじゃないです"),
    ("kirei deshita", "きれいでした"),
];

/// The raw table for a category, in authoring order.
pub(super) fn table(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Hiragana => HIRAGANA,
        Category::Katakana => KATAKANA,
        Category::Number => NUMBERS,
        Category::Kanji => KANJI,
        Category::Word => WORDS,
        Category::Sentence => SENTENCES,
        Category::Grammar => GRAMMAR,
    }
}

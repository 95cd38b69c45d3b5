//! Orthography definitions (made by FontLab https://www.fontlab.com/)
//!
//! Derived from the Fontaine font analysis project orthography tables,
//! (c) 2009, 2015 Edward H. Trager, released under the GNU GPL 2.0 or later.

use super::Orthography;
use super::Span::{Range as R, Single as S};

pub(super) static LATIN: &[Orthography] = &[
    Orthography {
        name: "Basic Latin",
        native: "Basic Latin",
        key: 0x0041,
        sample: "AaBbCcGgQqRrSsZz",
        spans: &[
            R(0x0041, 0x005A), R(0x0061, 0x007A),
        ],
    },
    Orthography {
        name: "Western European",
        native: "Western European",
        key: 0x00C0,
        sample: "ÁàåÇçæÐðéîñöœßþÿ",
        spans: &[
            R(0x00C0, 0x00CF), R(0x00D0, 0x00D6), R(0x00D8, 0x00DF), R(0x00E0, 0x00EF),
            R(0x00F0, 0x00F6), R(0x00F8, 0x00FF),
        ],
    },
    Orthography {
        name: "Catalan",
        native: "Català",
        key: 0x013F,
        sample: "ÀàÇçÉéÍíĿŀÚúÑñ",
        spans: &[
            S(0x00C0), S(0x00E0), S(0x00C7), S(0x00E7), S(0x00C8), S(0x00E8), S(0x00C9),
            S(0x00E9), S(0x00CD), S(0x00ED), S(0x00CF), S(0x00EF), S(0x013F), S(0x0140),
            S(0x00D2), S(0x00F2), S(0x00D3), S(0x00F3), S(0x00DA), S(0x00FA), S(0x00DC),
            S(0x00FC), S(0x00D1), S(0x00F1),
        ],
    },
    Orthography {
        name: "Baltic",
        native: "Baltic",
        key: 0x0136,
        sample: "ĀāĄąčĖęīĶļŅšž",
        spans: &[
            S(0x0100), S(0x0101), S(0x0104), S(0x0105), S(0x010C), S(0x010D), S(0x0112),
            S(0x0113), S(0x0116), S(0x0117), S(0x0118), S(0x0119), S(0x0122), S(0x0123),
            S(0x012A), S(0x012B), S(0x012E), S(0x012F), S(0x0136), S(0x0137), S(0x013B),
            S(0x013C), S(0x0145), S(0x0146), S(0x0160), S(0x0161), S(0x016A), S(0x016B),
            S(0x017D), S(0x017E), S(0x014C), S(0x014D), S(0x0156), S(0x0157), S(0x016A),
            S(0x016B), S(0x0172), S(0x0173), S(0x017D), S(0x017E),
        ],
    },
    Orthography {
        name: "Turkish",
        native: "Türkçe",
        key: 0x0130,
        sample: "ÂâÇçĞğİıÖöŞşÛû",
        spans: &[
            S(0x00C2), S(0x00E2), S(0x00C7), S(0x00E7), S(0x011E), S(0x011F), S(0x00CE),
            S(0x00EE), S(0x0130), S(0x0131), S(0x00D6), S(0x00F6), S(0x015E), S(0x015F),
            S(0x00DB), S(0x00FB), S(0x00DC), S(0x00FC),
        ],
    },
    Orthography {
        name: "Romanian",
        native: "Română",
        key: 0x021A,
        sample: "ÂâĂăÎîȘșȚț",
        spans: &[
            S(0x00C2), S(0x00E2), S(0x0102), S(0x0103), S(0x00CE), S(0x00EE), S(0x0218),
            S(0x0219), S(0x021A), S(0x021B),
        ],
    },
    Orthography {
        name: "Pan African Latin",
        native: "Pan African Latin",
        key: 0x00C0,
        sample: "ÀÁẬậíîȪȫ",
        spans: &[
            S(0x00D8), S(0x00F8), S(0x0110), S(0x0111), S(0x014A), S(0x014B), S(0x0152),
            S(0x0153), S(0x0181), S(0x0186), S(0x0187), S(0x0188), S(0x0189), S(0x018A),
            S(0x018E), S(0x018F), S(0x0190), S(0x0191), S(0x0192), S(0x0193), S(0x0194),
            S(0x0196), S(0x0197), S(0x0198), S(0x0199), S(0x019D), S(0x01A4), S(0x01A5),
            S(0x01A9), S(0x01AC), S(0x01AD), S(0x01AE), S(0x01B1), S(0x01B2), S(0x01B3),
            S(0x01B4), S(0x01B7), S(0x01DD), S(0x0241), S(0x0242), S(0x0243), S(0x0244),
            S(0x024B), S(0x024C), S(0x0251), S(0x0253), S(0x0254), S(0x0256), S(0x0257),
            S(0x0259), S(0x025B), S(0x0260), S(0x0263), S(0x0266), S(0x0268), S(0x0269),
            S(0x0272), S(0x027D), S(0x027E), S(0x0283), S(0x0288), S(0x0289), S(0x028A),
            S(0x028B), S(0x028C), S(0x0292), S(0x0294), S(0x0295), S(0x2C64), S(0x2C6D),
            S(0x2C72), S(0x2C73), S(0x02BC), S(0x02C0), S(0x02C6), S(0x02C7), S(0x02CA),
            S(0x02CB), S(0x0300), S(0x0301), S(0x0302), S(0x0303), S(0x0304), S(0x0307),
            S(0x0308), S(0x030C), S(0x030D), S(0x1DC4), S(0x1DC5), S(0x1DC6), S(0x1DC7),
            S(0x0323), S(0x0324), S(0x0329), S(0x032D), S(0x0330), S(0x0331), S(0x0327),
            S(0x00C0), S(0x00C1), S(0x00C2), S(0x00C3), S(0x00C4), S(0x00C8), S(0x00C9),
            S(0x00CA), S(0x00CB), S(0x00CC), S(0x00CD), S(0x00CE), S(0x00CF), S(0x00D1),
            S(0x00D2), S(0x00D3), S(0x00D4), S(0x00D6), S(0x00DC), S(0x00E0), S(0x00E1),
            S(0x00E2), S(0x00E3), S(0x00E4), S(0x00E8), S(0x00E9), S(0x00EA), S(0x00EB),
            S(0x00EC), S(0x00ED), S(0x00EE), S(0x00EF), S(0x1E2E), S(0x1E2F), S(0x00F1),
            S(0x00F2), S(0x00F3), S(0x00F4), S(0x00F6), S(0x00FC), S(0x0100), S(0x0101),
            S(0x0102), S(0x0103), S(0x010C), S(0x010D), S(0x0112), S(0x0113), S(0x0128),
            S(0x0129), S(0x014C), S(0x014D), S(0x0160), S(0x0161), S(0x0168), S(0x0169),
            S(0x016A), S(0x016B), S(0x0170), S(0x0171), S(0x0174), S(0x0175), S(0x01CD),
            S(0x01CE), S(0x01CF), S(0x01D0), S(0x01D1), S(0x01D2), S(0x01E6), S(0x01E7),
            S(0x0228), S(0x0229), S(0x1E04), S(0x1E05), S(0x1E0C), S(0x1E0D), S(0x1E0E),
            S(0x1E0F), S(0x1E12), S(0x1E13), S(0x1E24), S(0x1E25), S(0x1E36), S(0x1E37),
            S(0x1E3C), S(0x1E3D), S(0x1E3E), S(0x1E3F), S(0x1E44), S(0x1E45), S(0x1E46),
            S(0x1E47), S(0x1E4A), S(0x1E4B), S(0x1E4C), S(0x1E4D), S(0x1E50), S(0x1E51),
            S(0x1E52), S(0x1E53), S(0x1E62), S(0x1E63), S(0x1E6C), S(0x1E6D), S(0x1E6E),
            S(0x1E6F), S(0x1E70), S(0x1E71), S(0x1E80), S(0x1E81), S(0x1E82), S(0x1E83),
            S(0x1E84), S(0x1E85), S(0x1E92), S(0x1E93), S(0x1EA0), S(0x1EA1), S(0x1EAC),
            S(0x1EAD), S(0x01DE), S(0x01DF), S(0x1EB8), S(0x1EB9), S(0x1EBC), S(0x1EBD),
            S(0x1EC6), S(0x1EC7), S(0x1ECA), S(0x1ECB), S(0x1ECC), S(0x1ECD), S(0x1ED8),
            S(0x1ED9), S(0x022A), S(0x022B), S(0x01FF), S(0x01FE), S(0x1EE4), S(0x1EE5),
            S(0x1EF2), S(0x1EF3), S(0x019F), S(0x0275), S(0xA78D), S(0x0265), S(0xA78B),
            S(0xA78C), S(0x0166), S(0x0167), S(0x00D5), S(0x00D9), S(0x00DA), S(0x00DB),
            S(0x00DD), S(0x00F5), S(0x00F9), S(0x00FA), S(0x00FB), S(0x00FD), S(0x011A),
            S(0x011B), S(0x011C), S(0x011D), S(0x0120), S(0x0121), S(0x012A), S(0x012B),
            S(0x0131), S(0x0143), S(0x0144), S(0x0176), S(0x0177), S(0x017D), S(0x017E),
            S(0x01D3), S(0x01D4), S(0x01F8), S(0x01F9), S(0x024D), S(0x0267), S(0x02BF),
            S(0x02D7), S(0x02EE), S(0x1E5A), S(0x1E5B), S(0xA789), S(0xA78A), S(0x0245),
            S(0xA7AA),
        ],
    },
    Orthography {
        name: "Dutch",
        native: "Nederlands",
        key: 0x0132,
        sample: "ÁáËëĲĳÛû",
        spans: &[
            S(0x00C1), S(0x00E1), S(0x00C2), S(0x00E2), S(0x00C8), S(0x00E8), S(0x00C9),
            S(0x00E9), S(0x00CA), S(0x00EA), S(0x00CB), S(0x00EB), S(0x00CD), S(0x00ED),
            S(0x00CF), S(0x00EF), S(0x0132), S(0x0133), S(0x00D3), S(0x00F3), S(0x00D4),
            S(0x00F4), S(0x00D6), S(0x00F6), S(0x00DA), S(0x00FA), S(0x00DB), S(0x00FB),
            S(0x00C4), S(0x00E4), S(0x00DC), S(0x00FC),
        ],
    },
    Orthography {
        name: "Pinyin",
        native: "汉语拼音",
        key: 0x01DA,
        sample: "āáǎàēéěèǘǚǜü",
        spans: &[
            S(0x0101), S(0x00E1), S(0x01CE), S(0x00E0), S(0x0113), S(0x00E9), S(0x011B),
            S(0x00E8), S(0x012B), S(0x00ED), S(0x01D0), S(0x00EC), S(0x014D), S(0x00F3),
            S(0x01D2), S(0x00F2), S(0x016B), S(0x00FA), S(0x01D4), S(0x00F9), S(0x01D6),
            S(0x01D8), S(0x01DA), S(0x01DC), S(0x00FC),
        ],
    },
    Orthography {
        name: "Latin Ligatures",
        native: "Latin Ligatures",
        key: 0xFB06,
        sample: "ﬀ ﬁ ﬂ ﬃ ﬄ ﬅ ﬆ",
        spans: &[
            S(0xFB00), S(0xFB01), S(0xFB02), S(0xFB03), S(0xFB04), S(0xFB05), S(0xFB06),
        ],
    },
    Orthography {
        name: "Claudian Letters",
        native: "Claudian Letters",
        key: 0x2183,
        sample: "ℲⅎↃↄⱵⱶ",
        spans: &[
            S(0x2132), S(0x214E), S(0x2183), S(0x2184), S(0x2C75), S(0x2C76),
        ],
    },
    Orthography {
        name: "Venda",
        native: "Tshivenḓa",
        key: 0x1E12,
        sample: "Ḓ ḓ Ḽ ḽ Ṋ ṋ Ṅ ṅ Ṱ ṱ",
        spans: &[
            S(0x1E12), S(0x1E13), S(0x1E3C), S(0x1E3D), S(0x1E4A), S(0x1E4B), S(0x1E44),
            S(0x1E45), S(0x1E70), S(0x1E71),
        ],
    },
    Orthography {
        name: "Igbo Onwu",
        native: "Asụsụ Igbo",
        key: 0x1ECA,
        sample: "Ịị Ụụ Ọọ Ṅṅ",
        spans: &[
            S(0x1ECA), S(0x1ECB), S(0x1ECC), S(0x1ECD), S(0x1EE4), S(0x1EE5), S(0x1E44),
            S(0x1E45), S(0x00D1), S(0x00F1), S(0x00C1), S(0x00E1), S(0x00C0), S(0x00E0),
            S(0x00C9), S(0x00E9), S(0x00C8), S(0x00E8), S(0x00CD), S(0x00ED), S(0x00CC),
            S(0x00EC), S(0x00D3), S(0x00F3), S(0x00D2), S(0x00F2), S(0x00DA), S(0x00FA),
            S(0x00D9), S(0x00F9),
        ],
    },
];

pub(super) static GREEK: &[Orthography] = &[
    Orthography {
        name: "Basic Greek",
        native: "Ελληνικό αλφάβητο",
        key: 0x03A9,
        sample: "ΑαΒβΓγΔδΕεΞξΩω",
        spans: &[
            S(0x0386), S(0x0388), S(0x0389), S(0x038A), S(0x038C), S(0x038E), S(0x038F),
            S(0x0390), R(0x0391, 0x03A1), R(0x03A3, 0x03A9), R(0x03AA, 0x03B0),
            R(0x03B1, 0x03C9), R(0x03CA, 0x03CE),
        ],
    },
    Orthography {
        name: "Polytonic Greek",
        native: "Polytonic Greek",
        key: 0x1F21,
        sample: "ἡἔἂὄὗὥᾏᾟ",
        spans: &[
            R(0x1F00, 0x1F15), R(0x1F18, 0x1F1D), R(0x1F20, 0x1F45), R(0x1F48, 0x1F4D),
            R(0x1F50, 0x1F57), S(0x1F59), S(0x1F5B), S(0x1F5D), R(0x1F5F, 0x1F7D),
            R(0x1F80, 0x1FB4), R(0x1FB6, 0x1FBC), R(0x1FC2, 0x1FC4), R(0x1FC6, 0x1FD3),
            R(0x1FD6, 0x1FDB), R(0x1FE0, 0x1FEC), R(0x1FF2, 0x1FF4), R(0x1FF6, 0x1FFC),
        ],
    },
    Orthography {
        name: "Archaic Greek Letters",
        native: "Archaic Greek Letters",
        key: 0x03E0,
        sample: "ϘϙϚϛϜϞϟϠϡ",
        spans: &[
            S(0x0370), S(0x0371), S(0x0372), S(0x0373), S(0x0376), S(0x0377), R(0x03D8, 0x03E1),
            S(0x03F7), S(0x03F8), S(0x03FA), S(0x03FB),
        ],
    },
];

pub(super) static ARABIC: &[Orthography] = &[
    Orthography {
        name: "Arabic",
        native: "العربية",
        key: 0x0639,
        sample: "ا ب ت ث ج ح خ د ذ ر ز س",
        spans: &[
            R(0x0621, 0x063A), R(0x0640, 0x0652), R(0x0660, 0x0669),
        ],
    },
    Orthography {
        name: "Farsi",
        native: "فارسی",
        key: 0x067E,
        sample: "پ چ ژ ک گ ۀ ی",
        spans: &[
            S(0x067E), S(0x0686), S(0x0698), S(0x06A9), S(0x06AF), S(0x06CC), R(0x06F0, 0x06F9),
        ],
    },
    Orthography {
        name: "Urdu",
        native: "اُردو",
        key: 0x0679,
        sample: "ٹ پ چ ڈ ڐ ژ ڙ ے",
        spans: &[
            S(0x0679), S(0x067E), S(0x0686), S(0x0688), S(0x0691), S(0x0698), S(0x06A9),
            S(0x06AF), S(0x06BA), S(0x06BE), S(0x06C0), S(0x06C1), S(0x06C2), S(0x06C3),
            S(0x06CC), S(0x06D2), S(0x06D3), S(0x06D4), R(0x06F0, 0x06F9),
        ],
    },
    Orthography {
        name: "Kazakh",
        native: "قازاق",
        key: 0x06AD,
        sample: "ٴ ٵ ٷ ٸ پ چ ڭ گ ۆ ۉ",
        spans: &[
            S(0x0674), S(0x0675), S(0x0676), S(0x0677), S(0x0678), S(0x067E), S(0x0686),
            S(0x06AD), S(0x06AF), S(0x06C6), S(0x06C9), S(0x06CB), S(0x06D5),
        ],
    },
    Orthography {
        name: "Pashto",
        native: "پښتو",
        key: 0x0685,
        sample: "ټ پ ځ ڂ څ چ ډ ړ ګ ې",
        spans: &[
            S(0x067C), S(0x067E), S(0x0681), S(0x0685), S(0x0686), S(0x0689), S(0x0693),
            S(0x0696), S(0x0698), S(0x069A), S(0x06AB), S(0x06BC), S(0x06CD), S(0x06D0),
        ],
    },
    Orthography {
        name: "Sindhi",
        native: "سنڌي",
        key: 0x067A,
        sample: "ٺ ٻ ٽ ٿ ڀ ڃ ڄ ڇ",
        spans: &[
            S(0x067A), S(0x067B), S(0x067D), S(0x067E), S(0x067F), S(0x0680), S(0x0683),
            S(0x0684), S(0x0686), S(0x0687), S(0x068A), S(0x068C), S(0x068D), S(0x068E),
            S(0x068F), S(0x0699), S(0x06A6), S(0x06AF), S(0x06B1), S(0x06B2), S(0x06B3),
            S(0x06B4), S(0x06BB), S(0x06CD), S(0x06D0), S(0x06FD), S(0x06FE),
        ],
    },
    Orthography {
        name: "Uighur",
        native: "ئۇيغۇر",
        key: 0x06AD,
        sample: "ڛ ۆ ڭ ە پ چ ژ گ",
        spans: &[
            S(0x06AD), S(0x06C6), S(0x06C8), S(0x06CB), S(0x06D0), S(0x06D5), S(0x067E),
            S(0x0686), S(0x0698), S(0x06AF),
        ],
    },
];

pub(super) static CHINESE: &[Orthography] = &[
    Orthography {
        name: "Chinese Zhuyin Fuhao",
        native: "注音符號",
        key: 0x3105,
        sample: "ㄅㄆㄇㄈㄉㄊㄋㄌ",
        spans: &[
            R(0x3105, 0x312C),
        ],
    },
];

pub(super) static JAPANESE: &[Orthography] = &[
    Orthography {
        name: "Japanese Kana",
        native: "仮名",
        key: 0x3042,
        sample: "いろはにほへと",
        spans: &[
            R(0x3041, 0x3094), R(0x3099, 0x309E), R(0x30A1, 0x30FE),
        ],
    },
];

pub(super) static KOREAN: &[Orthography] = &[
    Orthography {
        name: "Korean Jamo",
        native: "자모",
        key: 0x3131,
        sample: "ㄱㄲㄳㄴㄵㄶㄷㄸㄹㄺ",
        spans: &[
            R(0x1100, 0x11FF), R(0x3131, 0x318E),
        ],
    },
    Orthography {
        name: "Korean Hangul",
        native: "한글 / 조선글",
        key: 0xAC00,
        sample: "",
        spans: &[
            R(0xAC00, 0xD7A3),
        ],
    },
];

pub(super) static UNCATEGORIZED: &[Orthography] = &[
    Orthography {
        name: "Ahom",
        native: "Ahom",
        key: 0x11700,
        sample: "",
        spans: &[
            R(0x11700, 0x11719), R(0x1171D, 0x1172B), R(0x11730, 0x1173F),
        ],
    },
    Orthography {
        name: "Aleut Cyrillic",
        native: "Aleut Cyrillic",
        key: 0x0414,
        sample: "",
        spans: &[
            S(0x0311), S(0x0406), S(0x040E), R(0x0410, 0x044F), S(0x0456), S(0x045E),
            R(0x0472, 0x0475), S(0x04A4), S(0x04A5), S(0x051E), S(0x051F),
        ],
    },
    Orthography {
        name: "Aleut Latin",
        native: "Unangan",
        key: 0x0041,
        sample: "AaBbFfGgXxRrSsZz",
        spans: &[
            R(0x0041, 0x0044), R(0x0046, 0x0049), R(0x004B, 0x004F), R(0x0051, 0x005A),
            R(0x0061, 0x0064), R(0x0066, 0x0069), R(0x006B, 0x006F), R(0x0071, 0x007A),
            S(0x011C), S(0x011D), S(0x0302),
        ],
    },
    Orthography {
        name: "Armenian",
        native: "Հայերեն",
        key: 0x0561,
        sample: "ԱաԲբԳգԴդ",
        spans: &[
            R(0x0531, 0x0556), R(0x0559, 0x055F), R(0x0561, 0x0587), S(0x0589), S(0x058A),
        ],
    },
    Orthography {
        name: "Astronomy",
        native: "Astronomy",
        key: 0x2605,
        sample: "",
        spans: &[
            S(0x2605), S(0x2606), R(0x2609, 0x260D), R(0x263D, 0x2644), R(0x2646, 0x2653),
            R(0x26B3, 0x26B7), S(0x26CE), S(0x26E2), R(0x2B50, 0x2B52), S(0x1F30C),
            R(0x1F311, 0x1F320),
        ],
    },
    Orthography {
        name: "Basic Cyrillic",
        native: "Кири́ллица",
        key: 0x0414,
        sample: "АБВГДЕЖЗИЙКЛ",
        spans: &[
            R(0x0410, 0x044F),
        ],
    },
    Orthography {
        name: "Unified Canadian Aboriginal Syllabics",
        native: "Unified Canadian Aboriginal Syllabics",
        key: 0x1433,
        sample: "ᐁᐂᐃᐄ ᑌᑍᑎᑏ ᓀᓁᓂᓃ ᕿᖀᖁᖂ",
        spans: &[
            R(0x1401, 0x1676),
        ],
    },
    Orthography {
        name: "Carian",
        native: "Carian",
        key: 0x102A0,
        sample: "",
        spans: &[
            R(0x102A0, 0x102D0),
        ],
    },
    Orthography {
        name: "Chakma",
        native: "Chakma",
        key: 0x11107,
        sample: "",
        spans: &[
            R(0x11100, 0x11134), R(0x11136, 0x11143),
        ],
    },
    Orthography {
        name: "Cherokee",
        native: "ᏣᎳᎩ",
        key: 0x13E3,
        sample: "ᎠᎣᎤᎴᎺᎾᏃᏆᏒᏔᏣᏫᏲᏴ",
        spans: &[
            R(0x13A0, 0x13F4),
        ],
    },
    Orthography {
        name: "Coptic",
        native: "Ⲙⲉⲧⲣⲉⲙ̀ⲛⲭⲏⲙⲓ",
        key: 0x03E2,
        sample: "ϢϣⲀⲁⲲⲳⳜⳝⳤ⳥",
        spans: &[
            R(0x03E2, 0x03EF), R(0x2C80, 0x2CB1), R(0x2CB2, 0x2CDB), R(0x2CDC, 0x2CE3),
            R(0x2CE4, 0x2CEA), R(0x2CF9, 0x2CFC), S(0x2CFD), S(0x2CFE), S(0x2CFF),
        ],
    },
    Orthography {
        name: "Currencies",
        native: "Currencies",
        key: 0x20A6,
        sample: "$¢£¥₧€₭",
        spans: &[
            S(0x0024), R(0x00A2, 0x00A5), S(0x058F), S(0x060B), S(0x09F2), S(0x09F3), S(0x09FB),
            S(0x0AF1), S(0x0BF9), S(0x0E3F), S(0x17DB), R(0x20A0, 0x20BD), S(0xA838), S(0xFDFC),
            S(0xFE69), S(0xFF04), S(0xFFE0), S(0xFFE1), S(0xFFE5), S(0xFFE6),
        ],
    },
    Orthography {
        name: "Food and Drink",
        native: "Food and Drink",
        key: 0x2615,
        sample: "",
        spans: &[
            S(0x2615), S(0x26FE), R(0x1F32D, 0x1F32F), R(0x1F33D, 0x1F33F), R(0x1F344, 0x1F37F),
            S(0x1F9C0),
        ],
    },
    Orthography {
        name: "Georgian",
        native: "ქართული დამწერლობა",
        key: 0x10D0,
        sample: "აბგდვზთი",
        spans: &[
            R(0x10D0, 0x10F0), R(0x10A0, 0x10C0),
        ],
    },
    Orthography {
        name: "Hebrew",
        native: "עִבְרִית",
        key: 0x05D0,
        sample: "א ב ד ה ו ז ח ט י",
        spans: &[
            R(0x05D0, 0x05EA),
        ],
    },
    Orthography {
        name: "Khmer",
        native: "អក្សរខ្មែរ",
        key: 0x1780,
        sample: "កខគឃងចឆជ",
        spans: &[
            R(0x1780, 0x17DC), R(0x17E0, 0x17E9),
        ],
    },
    Orthography {
        name: "Lao",
        native: "ພາສາລາວ",
        key: 0x0E81,
        sample: "ກຂຄງຈຊຍດ",
        spans: &[
            S(0x0E81), S(0x0E82), S(0x0E84), S(0x0E87), S(0x0E88), S(0x0E8A), S(0x0E8D),
            R(0x0E94, 0x0E97), R(0x0E99, 0x0E9F), S(0x0EA1), S(0x0EA2), S(0x0EA3), S(0x0EA5),
            S(0x0EA7), S(0x0EAA), S(0x0EAB), R(0x0EAD, 0x0EB9), S(0x0EBB), S(0x0EBC), S(0x0EBD),
            R(0x0EC0, 0x0EC4), S(0x0EC6), R(0x0EC8, 0x0ECD), R(0x0ED0, 0x0ED9), S(0x0EDC),
            S(0x0EDD),
        ],
    },
    Orthography {
        name: "Mende Kikakui",
        native: "Mende Kikakui",
        key: 0x1E800,
        sample: "",
        spans: &[
            R(0x1E800, 0x1E8C4), R(0x1E8C7, 0x1E8D6),
        ],
    },
    Orthography {
        name: "Miao",
        native: "Miao",
        key: 0x16F00,
        sample: "",
        spans: &[
            R(0x16F00, 0x16F44), R(0x16F50, 0x16F7E), R(0x16F8F, 0x16F9F),
        ],
    },
    Orthography {
        name: "Myanmar",
        native: "မြန်မာအက္ခရာ",
        key: 0x1000,
        sample: "ကခဂဃငစဆဇ",
        spans: &[
            R(0x1000, 0x1021), R(0x1023, 0x1027), S(0x1029), S(0x102A), R(0x102C, 0x1032),
            R(0x1036, 0x1039), R(0x1040, 0x1059),
        ],
    },
    Orthography {
        name: "Ogham",
        native: "Ogham",
        key: 0x1681,
        sample: "ᚁᚂᚃᚄᚋᚌᚍᚎ",
        spans: &[
            R(0x1680, 0x169C),
        ],
    },
    Orthography {
        name: "Polynesian",
        native: "Polynesian",
        key: 0x0100,
        sample: "AāeēiīOōuūhkLmnpwʻ",
        spans: &[
            S(0x0041), S(0x0061), S(0x0100), S(0x0101), S(0x0045), S(0x0065), S(0x0112),
            S(0x0113), S(0x0049), S(0x0069), S(0x012A), S(0x012B), S(0x004F), S(0x006F),
            S(0x014C), S(0x014D), S(0x0055), S(0x0075), S(0x016A), S(0x016B), R(0x0046, 0x0048),
            R(0x0066, 0x0068), R(0x004B, 0x004E), R(0x006B, 0x006E), S(0x0050), S(0x0070),
            R(0x0052, 0x0054), R(0x0072, 0x0074), S(0x0056), S(0x0076), S(0x0057), S(0x0077),
            S(0x02BB), S(0x0027),
        ],
    },
    Orthography {
        name: "Runic",
        native: "ᚠᚢᚦᛆᚱᚴ",
        key: 0x16A0,
        sample: "ᚠᚡᚢᚣᚤᚥꘖᚧ",
        spans: &[
            R(0x16A0, 0x16F0),
        ],
    },
    Orthography {
        name: "Syriac",
        native: "ܠܫܢܐ ܣܘܪܝܝܐ",
        key: 0x0710,
        sample: "ܐ ܒ ܓ ܔ ܕ ܩ ܫ ܬ",
        spans: &[
            R(0x0710, 0x072C),
        ],
    },
    Orthography {
        name: "Thaana",
        native: "ތާނަ",
        key: 0x0780,
        sample: "ހ ށ ނ ރ ބ ޅ ކ އ",
        spans: &[
            R(0x0780, 0x07B0),
        ],
    },
    Orthography {
        name: "Thai",
        native: "ภาษาไทย",
        key: 0x0E01,
        sample: "ฟหกดสวงท",
        spans: &[
            R(0x0E01, 0x0E3A), R(0x0E3F, 0x0E5B),
        ],
    },
    Orthography {
        name: "Tibetan",
        native: "དབུ་ཅན་",
        key: 0x0F40,
        sample: "ཀ ཁ ག གྷ ང	ཅ ཆ ཇ",
        spans: &[
            R(0x0F00, 0x0F47), R(0x0F49, 0x0F6A), R(0x0F71, 0x0F7F), R(0x0F80, 0x0F8B),
            R(0x0F90, 0x0F97), R(0x0F99, 0x0FBC), R(0x0FBE, 0x0FCC), S(0x0FCF),
        ],
    },
    Orthography {
        name: "Yi",
        native: "ꆈꌠꁱꂷ",
        key: 0xA000,
        sample: "ꀀꀁꀂꀃꀄꀅꀆꀇ",
        spans: &[
            R(0xA000, 0xA48C),
        ],
    },
    Orthography {
        name: "Mathematical Greek",
        native: "Mathematical Greek",
        key: 0x1D6D1,
        sample: "",
        spans: &[
            S(0x03F5), S(0x03D1), S(0x03F0), S(0x03D5), S(0x03F1), S(0x03D6), S(0x03DC),
            S(0x03DD), R(0x1D6A8, 0x1D7CB),
        ],
    },
    Orthography {
        name: "Mathematical Latin",
        native: "Mathematical Latin",
        key: 0x2102,
        sample: "",
        spans: &[
            R(0x1D400, 0x1D454), S(0x210E), R(0x1D456, 0x1D49C), S(0x212C), S(0x1D49E),
            S(0x1D49F), S(0x2130), S(0x2131), S(0x1D4A2), S(0x210B), S(0x2110), S(0x1D4A5),
            S(0x1D4A6), S(0x2112), S(0x2133), R(0x1D4A9, 0x1D4AC), S(0x211B),
            R(0x1D4AE, 0x1D4B9), S(0x212F), S(0x1D4BB), S(0x210A), R(0x1D4BD, 0x1D4C3),
            S(0x2134), R(0x1D4C5, 0x1D505), S(0x212D), R(0x1D507, 0x1D50A), S(0x210C),
            S(0x2111), R(0x1D50D, 0x1D514), S(0x211C), R(0x1D516, 0x1D51C), S(0x2128),
            R(0x1D51E, 0x1D539), S(0x2102), R(0x1D53B, 0x1D53E), S(0x210D), R(0x1D540, 0x1D544),
            S(0x2115), S(0x1D546), S(0x2119), S(0x211A), S(0x211D), R(0x1D54A, 0x1D550),
            S(0x2124), R(0x1D552, 0x1D56B),
        ],
    },
    Orthography {
        name: "Mathematical Numerals",
        native: "Mathematical Numerals",
        key: 0x1D7D1,
        sample: "",
        spans: &[
            R(0x1D7CE, 0x1D7FF),
        ],
    },
    Orthography {
        name: "Mathematical Operators",
        native: "Mathematical Operators",
        key: 0x2208,
        sample: "∂∈∉∫∬≠⊂⊗⋈⋂",
        spans: &[
            S(0x002B), S(0x003C), S(0x003D), S(0x003E), S(0x007C), S(0x007E), S(0x00AC),
            S(0x00B1), S(0x00D7), S(0x00F7), S(0x03F6), R(0x0606, 0x0608), S(0x2044), S(0x2052),
            R(0x207A, 0x207C), R(0x208A, 0x208C), S(0x2118), R(0x2140, 0x2144), S(0x214B),
            R(0x2190, 0x2194), S(0x219A), S(0x219B), S(0x21A0), S(0x21A3), S(0x21A6), S(0x21AE),
            S(0x21CE), S(0x21CF), S(0x21D2), S(0x21D4), R(0x21F4, 0x22FF), S(0x2320), S(0x2321),
            S(0x237C), R(0x239B, 0x23B3), R(0x23DC, 0x23E1), S(0x25B7), S(0x25C1),
            R(0x25F8, 0x25FF), S(0x266F), R(0x27C0, 0x27FF), R(0x2900, 0x29FF),
            R(0x2A00, 0x2AFF), R(0x2B30, 0x2B44), R(0x2B47, 0x2B4C), S(0xFB29), S(0xFE62),
            R(0xFE64, 0xFE66), S(0xFF0B), R(0xFF1C, 0xFF1E), S(0xFF5C), S(0xFF5E), S(0xFFE2),
            R(0xFFE9, 0xFFEC), S(0x1D6C1), S(0x1D6DB), S(0x1D6FB), S(0x1D715), S(0x1D735),
            S(0x1D74F), S(0x1D76F), S(0x1D789), S(0x1D7A9), S(0x1D7C3), S(0x1EEF0), S(0x1EEF1),
        ],
    },
    Orthography {
        name: "Chess Symbols",
        native: "Chess Symbols",
        key: 0x2659,
        sample: "♔♕♖♗♘♙♚♛♜♝♞♟",
        spans: &[
            R(0x2654, 0x265F),
        ],
    },
    Orthography {
        name: "Emoticons",
        native: "Emoticons",
        key: 0x263A,
        sample: "",
        spans: &[
            R(0x2639, 0x263B), R(0x1F600, 0x1F640), R(0x1F645, 0x1F64F),
        ],
    },
    Orthography {
        name: "Bengali",
        native: "বাংলা",
        key: 0x0985,
        sample: "অ আ ই ঈ উ এ ঐ ও ঔ ক খ গ",
        spans: &[
            R(0x0981, 0x0983), R(0x0985, 0x098C), R(0x098F, 0x0990), R(0x0993, 0x09A8),
            R(0x09AA, 0x09B0), S(0x09B2), R(0x09B6, 0x09B9), S(0x09BC), R(0x09BE, 0x09C4),
            R(0x09C7, 0x09C8), R(0x09CB, 0x09CD), S(0x09D7), R(0x09DC, 0x09DD),
            R(0x09DF, 0x09E3), R(0x09E6, 0x09FA),
        ],
    },
    Orthography {
        name: "Devanagari",
        native: "देवनागरी",
        key: 0x0915,
        sample: "क ख ग घ ङ च छ ज झ ञ ट",
        spans: &[
            R(0x0905, 0x0914), R(0x0915, 0x0939), R(0x093F, 0x094C), S(0x094D),
            R(0x0958, 0x095F), R(0x0960, 0x0965), R(0x0966, 0x096F), S(0x0970),
        ],
    },
    Orthography {
        name: "Kannada",
        native: "ಕನ್ನಡ",
        key: 0x0CB9,
        sample: "ವ ಶ ಷ ಸ ಹ ಒ ಓ ಔ ಕ ಖ ಗ",
        spans: &[
            R(0x0C82, 0x0C83), R(0x0C85, 0x0C8C), R(0x0C8E, 0x0C90), R(0x0C92, 0x0CA8),
            R(0x0CAA, 0x0CB3), R(0x0CB5, 0x0CB9), R(0x0CBE, 0x0CC4), R(0x0CC6, 0x0CC8),
            R(0x0CCA, 0x0CCD), R(0x0CD5, 0x0CD6), S(0x0CDE), R(0x0CE0, 0x0CE1),
            R(0x0CE6, 0x0CEF),
        ],
    },
    Orthography {
        name: "Tamil",
        native: "தமிழ் அரிச்சுவடி ",
        key: 0x0B95,
        sample: "கஙசஜஞடணத",
        spans: &[
            S(0x0B82), S(0x0B83), S(0x0B85), S(0x0B86), S(0x0B87), S(0x0B88), S(0x0B89),
            S(0x0B8A), S(0x0B8E), S(0x0B8F), S(0x0B90), S(0x0B92), S(0x0B93), S(0x0B94),
            S(0x0B95), S(0x0B99), S(0x0B9A), S(0x0B9C), S(0x0B9E), S(0x0B9F), S(0x0BA3),
            S(0x0BA4), S(0x0BA8), S(0x0BA9), S(0x0BAA), S(0x0BAE), S(0x0BAF), S(0x0BB0),
            S(0x0BB1), S(0x0BB2), S(0x0BB3), S(0x0BB4), S(0x0BB5), S(0x0BB6), S(0x0BB7),
            S(0x0BB8), S(0x0BB9), S(0x0BBE), S(0x0BBF), S(0x0BC0), S(0x0BC1), S(0x0BC2),
            S(0x0BC6), S(0x0BC7), S(0x0BC8), S(0x0BCA), S(0x0BCB), S(0x0BCC), S(0x0BCD),
            S(0x0BD0), S(0x0BD7), R(0x0BE6, 0x0BEF), S(0x0BF0), S(0x0BF1), S(0x0BF2), S(0x0BF3),
            S(0x0BF4), S(0x0BF5), S(0x0BF6), S(0x0BF7), S(0x0BF8), S(0x0BF9), S(0x0BFA),
        ],
    },
    Orthography {
        name: "Sinhala",
        native: "සිංහල",
        key: 0x0D9A,
        sample: "ක ඛ ග ඝ ඞ ඟ ච ඡ",
        spans: &[
            S(0x0D82), S(0x0D83), S(0x0D85), S(0x0D86), S(0x0D87), S(0x0D88), S(0x0D89),
            S(0x0D8A), S(0x0D8B), S(0x0D8C), S(0x0D8D), S(0x0D8E), S(0x0D8F), S(0x0D90),
            S(0x0D91), S(0x0D92), S(0x0D93), S(0x0D94), S(0x0D95), S(0x0D96), S(0x0D9A),
            S(0x0D9B), S(0x0D9C), S(0x0D9D), S(0x0D9E), S(0x0D9F), S(0x0DA0), S(0x0DA1),
            S(0x0DA2), S(0x0DA3), S(0x0DA4), S(0x0DA5), S(0x0DA6), S(0x0DA7), S(0x0DA8),
            S(0x0DA9), S(0x0DAA), S(0x0DAB), S(0x0DAC), S(0x0DAD), S(0x0DAE), S(0x0DAF),
            S(0x0DB0), S(0x0DB1), S(0x0DB3), S(0x0DB4), S(0x0DB5), S(0x0DB6), S(0x0DB7),
            S(0x0DB8), S(0x0DB9), S(0x0DBA), S(0x0DBB), S(0x0DBD), S(0x0DC0), S(0x0DC1),
            S(0x0DC2), S(0x0DC3), S(0x0DC4), S(0x0DC5), S(0x0DC6), S(0x0DCA), S(0x0DCF),
            S(0x0DD0), S(0x0DD1), S(0x0DD2), S(0x0DD3), S(0x0DD4), S(0x0DD6), S(0x0DD8),
            S(0x0DD9), S(0x0DDA), S(0x0DDB), S(0x0DDC), S(0x0DDD), S(0x0DDE), S(0x0DDF),
            S(0x0DF2), S(0x0DF3), S(0x0DF4),
        ],
    },
    Orthography {
        name: "Telugu",
        native: "తెలుగు",
        key: 0x0C15,
        sample: "క ఖ గ ఘ ఙ చ ఛ జ",
        spans: &[
            S(0x0C01), S(0x0C02), S(0x0C03), S(0x0C05), S(0x0C06), S(0x0C07), S(0x0C08),
            S(0x0C09), S(0x0C0A), S(0x0C0B), S(0x0C0C), S(0x0C0E), S(0x0C0F), S(0x0C10),
            S(0x0C12), S(0x0C13), S(0x0C14), S(0x0C15), S(0x0C16), S(0x0C17), S(0x0C18),
            S(0x0C19), S(0x0C1A), S(0x0C1B), S(0x0C1C), S(0x0C1D), S(0x0C1E), S(0x0C1F),
            S(0x0C20), S(0x0C21), S(0x0C22), S(0x0C23), S(0x0C24), S(0x0C25), S(0x0C26),
            S(0x0C27), S(0x0C28), S(0x0C2A), S(0x0C2B), S(0x0C2C), S(0x0C2D), S(0x0C2E),
            S(0x0C2F), S(0x0C30), S(0x0C31), S(0x0C32), S(0x0C33), S(0x0C35), S(0x0C36),
            S(0x0C37), S(0x0C38), S(0x0C39), S(0x0C3D), S(0x0C3E), S(0x0C3F), S(0x0C40),
            S(0x0C41), S(0x0C42), S(0x0C43), S(0x0C44), S(0x0C46), S(0x0C47), S(0x0C48),
            S(0x0C4A), S(0x0C4B), S(0x0C4C), S(0x0C4D), S(0x0C55), S(0x0C56), S(0x0C58),
            S(0x0C59), S(0x0C60), S(0x0C61), S(0x0C62), S(0x0C63), S(0x0C66), S(0x0C67),
            S(0x0C68), S(0x0C69), S(0x0C6A), S(0x0C6B), S(0x0C6C), S(0x0C6D), S(0x0C6E),
            S(0x0C6F), S(0x0C78), S(0x0C79), S(0x0C7A), S(0x0C7B), S(0x0C7C), S(0x0C7D),
            S(0x0C7E), S(0x0C7F),
        ],
    },
    Orthography {
        name: "Malayalam",
        native: "മലയാളം",
        key: 0x0D15,
        sample: "ക ഖ ഗ ഘ ങ ച ഛ ജ",
        spans: &[
            S(0x0D02), S(0x0D03), S(0x0D05), S(0x0D06), S(0x0D07), S(0x0D08), S(0x0D09),
            S(0x0D0A), S(0x0D0B), S(0x0D0C), S(0x0D0E), S(0x0D0F), S(0x0D10), S(0x0D12),
            S(0x0D13), S(0x0D14), S(0x0D15), S(0x0D16), S(0x0D17), S(0x0D18), S(0x0D19),
            S(0x0D1A), S(0x0D1B), S(0x0D1C), S(0x0D1D), S(0x0D1E), S(0x0D1F), S(0x0D20),
            S(0x0D21), S(0x0D22), S(0x0D23), S(0x0D24), S(0x0D25), S(0x0D26), S(0x0D27),
            S(0x0D28), S(0x0D2A), S(0x0D2B), S(0x0D2C), S(0x0D2D), S(0x0D2E), S(0x0D2F),
            S(0x0D30), S(0x0D31), S(0x0D32), S(0x0D33), S(0x0D34), S(0x0D35), S(0x0D36),
            S(0x0D37), S(0x0D38), S(0x0D39), S(0x0D3D), S(0x0D3E), S(0x0D3F), S(0x0D40),
            S(0x0D41), S(0x0D42), S(0x0D43), S(0x0D44), S(0x0D46), S(0x0D47), S(0x0D48),
            S(0x0D4A), S(0x0D4B), S(0x0D4C), S(0x0D4D), S(0x0D57), S(0x0D60), S(0x0D61),
            S(0x0D62), S(0x0D63), S(0x0D66), S(0x0D67), S(0x0D68), S(0x0D69), S(0x0D6A),
            S(0x0D6B), S(0x0D6C), S(0x0D6D), S(0x0D6E), S(0x0D6F), S(0x0D70), S(0x0D71),
            S(0x0D72), S(0x0D73), S(0x0D74), S(0x0D75), S(0x0D79), S(0x0D7A), S(0x0D7B),
            S(0x0D7C), S(0x0D7D), S(0x0D7E), S(0x0D7F),
        ],
    },
    Orthography {
        name: "Gujarati",
        native: "ગુજરાતી લિપિ",
        key: 0x0A95,
        sample: "ક ખ ગ ઘ ઙ ચ છ જ",
        spans: &[
            S(0x0A81), S(0x0A82), S(0x0A83), S(0x0A85), S(0x0A86), S(0x0A87), S(0x0A88),
            S(0x0A89), S(0x0A8A), S(0x0A8B), S(0x0A8C), S(0x0A8D), S(0x0A8F), S(0x0A90),
            S(0x0A91), S(0x0A93), S(0x0A94), S(0x0A95), S(0x0A96), S(0x0A97), S(0x0A98),
            S(0x0A99), S(0x0A9A), S(0x0A9B), S(0x0A9C), S(0x0A9D), S(0x0A9E), S(0x0A9F),
            S(0x0AA0), S(0x0AA1), S(0x0AA2), S(0x0AA3), S(0x0AA4), S(0x0AA5), S(0x0AA6),
            S(0x0AA7), S(0x0AA8), S(0x0AAA), S(0x0AAB), S(0x0AAC), S(0x0AAD), S(0x0AAE),
            S(0x0AAF), S(0x0AB0), S(0x0AB2), S(0x0AB3), S(0x0AB5), S(0x0AB6), S(0x0AB7),
            S(0x0AB8), S(0x0AB9), S(0x0ABC), S(0x0ABD), S(0x0ABE), S(0x0ABF), S(0x0AC0),
            S(0x0AC1), S(0x0AC2), S(0x0AC3), S(0x0AC4), S(0x0AC5), S(0x0AC7), S(0x0AC8),
            S(0x0AC9), S(0x0ACB), S(0x0ACC), S(0x0ACD), S(0x0AD0), S(0x0AE0), S(0x0AE1),
            S(0x0AE2), S(0x0AE3), S(0x0AE6), S(0x0AE7), S(0x0AE8), S(0x0AE9), S(0x0AEA),
            S(0x0AEB), S(0x0AEC), S(0x0AED), S(0x0AEE), S(0x0AEF), S(0x0AF1),
        ],
    },
    Orthography {
        name: "Gurmukhi",
        native: "ਗੁਰਮੁਖੀ",
        key: 0x0A15,
        sample: "ਕ ਖ ਗ ਘ ਙ ਚ ਛ ਜ",
        spans: &[
            S(0x0A01), S(0x0A02), S(0x0A03), S(0x0A05), S(0x0A06), S(0x0A07), S(0x0A08),
            S(0x0A09), S(0x0A0A), S(0x0A0F), S(0x0A10), S(0x0A13), S(0x0A14), S(0x0A15),
            S(0x0A16), S(0x0A17), S(0x0A18), S(0x0A19), S(0x0A1A), S(0x0A1B), S(0x0A1C),
            S(0x0A1D), S(0x0A1E), S(0x0A1F), S(0x0A20), S(0x0A21), S(0x0A22), S(0x0A23),
            S(0x0A24), S(0x0A25), S(0x0A26), S(0x0A27), S(0x0A28), S(0x0A2A), S(0x0A2B),
            S(0x0A2C), S(0x0A2D), S(0x0A2E), S(0x0A2F), S(0x0A30), S(0x0A32), S(0x0A33),
            S(0x0A35), S(0x0A36), S(0x0A38), S(0x0A39), S(0x0A3C), S(0x0A3E), S(0x0A3F),
            S(0x0A40), S(0x0A41), S(0x0A42), S(0x0A47), S(0x0A48), S(0x0A4B), S(0x0A4C),
            S(0x0A4D), S(0x0A51), S(0x0A59), S(0x0A5A), S(0x0A5B), S(0x0A5C), S(0x0A5E),
            S(0x0A66), S(0x0A67), S(0x0A68), S(0x0A69), S(0x0A6A), S(0x0A6B), S(0x0A6C),
            S(0x0A6D), S(0x0A6E), S(0x0A6F), S(0x0A70), S(0x0A71), S(0x0A72), S(0x0A73),
            S(0x0A74), S(0x0A75),
        ],
    },
    Orthography {
        name: "Oriya",
        native: "ଓଡ଼ିଆ",
        key: 0x0B15,
        sample: "କ ଖ ଗ ଘ ଙ ଚ ଛ ଜ",
        spans: &[
            S(0x0B01), S(0x0B02), S(0x0B03), S(0x0B05), S(0x0B06), S(0x0B07), S(0x0B08),
            S(0x0B09), S(0x0B0A), S(0x0B0B), S(0x0B0C), S(0x0B0F), S(0x0B10), S(0x0B13),
            S(0x0B14), S(0x0B15), S(0x0B16), S(0x0B17), S(0x0B18), S(0x0B19), S(0x0B1A),
            S(0x0B1B), S(0x0B1C), S(0x0B1D), S(0x0B1E), S(0x0B1F), S(0x0B20), S(0x0B21),
            S(0x0B22), S(0x0B23), S(0x0B24), S(0x0B25), S(0x0B26), S(0x0B27), S(0x0B28),
            S(0x0B2A), S(0x0B2B), S(0x0B2C), S(0x0B2D), S(0x0B2E), S(0x0B2F), S(0x0B30),
            S(0x0B32), S(0x0B33), S(0x0B35), S(0x0B36), S(0x0B37), S(0x0B38), S(0x0B39),
            S(0x0B3C), S(0x0B3D), S(0x0B3E), S(0x0B3F), S(0x0B40), S(0x0B41), S(0x0B42),
            S(0x0B43), S(0x0B44), S(0x0B47), S(0x0B48), S(0x0B4B), S(0x0B4C), S(0x0B4D),
            S(0x0B56), S(0x0B57), S(0x0B5C), S(0x0B5D), S(0x0B5F), S(0x0B60), S(0x0B61),
            S(0x0B62), S(0x0B63), S(0x0B66), S(0x0B67), S(0x0B68), S(0x0B69), S(0x0B6A),
            S(0x0B6B), S(0x0B6C), S(0x0B6D), S(0x0B6E), S(0x0B6F), S(0x0B70), S(0x0B71),
        ],
    },
    Orthography {
        name: "Kaithi",
        native: "Kaithi",
        key: 0x1108D,
        sample: "𑂍𑂎𑂏",
        spans: &[
            R(0x11080, 0x110C1),
        ],
    },
    Orthography {
        name: "Kharoshthi",
        native: "Kharoshthi",
        key: 0x101A10,
        sample: "𐨐𐨑𐨒𐨓",
        spans: &[
            R(0x10A00, 0x10A03), S(0x10A05), S(0x10A06), R(0x10A0C, 0x10A13),
            R(0x10A15, 0x10A17), R(0x10A19, 0x10A33), R(0x10A38, 0x10A3A), S(0x10A3F),
            R(0x10A40, 0x10A47), R(0x10A50, 0x10A58),
        ],
    },
    Orthography {
        name: "Lepcha",
        native: "Lepcha",
        key: 0x1C00,
        sample: "ᰀᰁᰂ",
        spans: &[
            R(0x1C00, 0x1C37), R(0x1C3B, 0x1C49), R(0x1C4D, 0x1C4F),
        ],
    },
    Orthography {
        name: "Limbu",
        native: "Limbu",
        key: 0x1901,
        sample: "ᤁᤂᤃ",
        spans: &[
            R(0x1900, 0x191C), R(0x1920, 0x192B), R(0x1930, 0x193B), S(0x1940),
            R(0x1944, 0x194F),
        ],
    },
    Orthography {
        name: "Meetei Mayak",
        native: "Meetei Mayak",
        key: 0xABC0,
        sample: "ꯀꯁꯂ",
        spans: &[
            R(0xABC0, 0xABED), R(0xABF0, 0xABF9),
        ],
    },
    Orthography {
        name: "Ol Chiki",
        native: "Ol Chiki",
        key: 0x1C50,
        sample: "᱐᱑᱒",
        spans: &[
            R(0x1C50, 0x1C7F),
        ],
    },
    Orthography {
        name: "Saurashtra",
        native: "Saurashtra",
        key: 0xA882,
        sample: "ꢂꢃꢄ",
        spans: &[
            R(0xA880, 0xA8C4), R(0xA8CE, 0xA8D9),
        ],
    },
    Orthography {
        name: "Syloti Nagri",
        native: "Syloti Nagri",
        key: 0xA800,
        sample: "ꠀꠁꠂ",
        spans: &[
            R(0xA800, 0xA82B),
        ],
    },
    Orthography {
        name: "Vedic Extensions",
        native: "Vedic Extensions",
        key: 0x1CD0,
        sample: "᳐᳑᳒",
        spans: &[
            R(0x1CD0, 0x1CF2),
        ],
    },
    Orthography {
        name: "Hanunó'o",
        native: "Hanunó'o",
        key: 0x1723,
        sample: "ᜣ ᜤ ᜥ ᜦ ᜧ ᜨ ᜩ ᜪ",
        spans: &[
            S(0x1720), S(0x1721), S(0x1722), S(0x1723), S(0x1724), S(0x1725), S(0x1726),
            S(0x1727), S(0x1728), S(0x1729), S(0x172A), S(0x172B), S(0x172C), S(0x172D),
            S(0x172E), S(0x172F), S(0x1730), S(0x1731), S(0x1732), S(0x1733), S(0x1734),
        ],
    },
    Orthography {
        name: "N’Ko",
        native: "ߒߞߏ",
        key: 0x07CA,
        sample: "‎ߊ‎ ‎ߋ‎ ‎ߌ‎ ‎ߍ‎ ‎ߎ‎ ‎ߏ‎ ‎ߐ‎ ‎ߑ‎ ‎ߒ‎ ‎ߓ‎ ‎ߔ‎ ‎ߕ‎ ‎ߖ‎",
        spans: &[
            S(0x07C0), S(0x07C1), S(0x07C2), S(0x07C3), S(0x07C4), S(0x07C5), S(0x07C6),
            S(0x07C7), S(0x07C8), S(0x07C9), S(0x07CA), S(0x07CB), S(0x07CC), S(0x07CD),
            S(0x07CE), S(0x07CF), S(0x07D0), S(0x07D1), S(0x07D2), S(0x07D3), S(0x07D4),
            S(0x07D5), S(0x07D6), S(0x07D7), S(0x07D8), S(0x07D9), S(0x07DA), S(0x07DB),
            S(0x07DC), S(0x07DD), S(0x07DE), S(0x07DF), S(0x07E0), S(0x07E1), S(0x07E2),
            S(0x07E3), S(0x07E4), S(0x07E5), S(0x07E6), S(0x07E7), S(0x07E8), S(0x07E9),
            S(0x07EA), S(0x07EB), S(0x07EC), S(0x07ED), S(0x07EE), S(0x07EF), S(0x07F0),
            S(0x07F1), S(0x07F2), S(0x07F3), S(0x07F4), S(0x07F5), S(0x07F6), S(0x07F7),
            S(0x07F8), S(0x07F9), S(0x07FA),
        ],
    },
    Orthography {
        name: "Osmanya",
        native: "𐒋𐒘𐒈𐒑𐒛𐒒𐒕𐒀",
        key: 0x10480,
        sample: "𐒀 𐒁 𐒂 𐒃 𐒄 𐒅 𐒆 𐒇",
        spans: &[
            S(0x10480), S(0x10481), S(0x10482), S(0x10483), S(0x10484), S(0x10485), S(0x10486),
            S(0x10487), S(0x10488), S(0x10489), S(0x1048A), S(0x1048B), S(0x1048C), S(0x1048D),
            S(0x1048E), S(0x1048F), S(0x10490), S(0x10491), S(0x10492), S(0x10493), S(0x10494),
            S(0x10495), S(0x10496), S(0x10497), S(0x10498), S(0x10499), S(0x1049A), S(0x1049B),
            S(0x1049C), S(0x1049D), S(0x104A0), S(0x104A1), S(0x104A2), S(0x104A3), S(0x104A4),
            S(0x104A5), S(0x104A6), S(0x104A7), S(0x104A8), S(0x104A9),
        ],
    },
    Orthography {
        name: "Ethiopic",
        native: "ግዕዝ",
        key: 0x1210,
        sample: "ሀ ሁ ሂ ሃ ሄ ህ ሆ ሐ ሑ ሒ",
        spans: &[
            R(0x1200, 0x1248), R(0x124A, 0x124D), R(0x1250, 0x1256), S(0x1258),
            R(0x125A, 0x125D), R(0x1260, 0x1288), R(0x128A, 0x128D), R(0x1290, 0x12B0),
            R(0x12B2, 0x12B5), R(0x12B8, 0x12BE), S(0x12C0), R(0x12C2, 0x12C5),
            R(0x12C8, 0x12D6), R(0x12D8, 0x1310), R(0x1312, 0x1315), R(0x1318, 0x135A),
            R(0x135F, 0x137C),
        ],
    },
    Orthography {
        name: "Tai Le",
        native: "Tai Le",
        key: 0x1950,
        sample: "ᥐᥑᥒᥓ ᥣᥤᥥᥦ",
        spans: &[
            R(0x1950, 0x196D), R(0x1970, 0x1974),
        ],
    },
    Orthography {
        name: "New Tai Lue",
        native: "New Tai Lue",
        key: 0x1980,
        sample: "ᦀᦁᦂᦃ ᦖᦰ ᦖᦱ ᦖᦲ ᦖᦳ",
        spans: &[
            R(0x1980, 0x19A9), R(0x19B0, 0x19C9), R(0x19D0, 0x19D9), R(0x19DE, 0x19DF),
        ],
    },
    Orthography {
        name: "Phags Pa",
        native: "Phags Pa",
        key: 0xA840,
        sample: "ꡀ ꡁ ꡂ ᡃ ꡄ ꡅ ꡆ ꡇ",
        spans: &[
            R(0xA840, 0xA877),
        ],
    },
    Orthography {
        name: "Mongolian",
        native: "Mongolian",
        key: 0x1820,
        sample: "ᠠᠡᠢᠣᠤᠥᠦᠧ",
        spans: &[
            R(0x1800, 0x180A), R(0x180B, 0x180E), R(0x1810, 0x1819), R(0x1820, 0x1877),
            R(0x1880, 0x18AA),
        ],
    },
    Orthography {
        name: "Tai Tham (Lanna)",
        native: "ᨲᩫ᩠ᩅᨾᩮᩥᩬᨦ",
        key: 0x1A20,
        sample: "ᨲᩫ᩠ᩅᨾᩮᩥᩬᨦ",
        spans: &[
            R(0x1A20, 0x1A5E), R(0x1A60, 0x1A7C), R(0x1A7F, 0x1A89), R(0x1A90, 0x1A99),
            R(0x1AA0, 0x1AAD),
        ],
    },
    Orthography {
        name: "Glagolitic",
        native: "hlaholika",
        key: 0x2C00,
        sample: " ⰰⰴⱏⰻⰽⱁ",
        spans: &[
            R(0x2C00, 0x2C2E), R(0x2C30, 0x2C5E),
        ],
    },
    Orthography {
        name: "Gothic",
        native: "𐌲𐌿𐍄𐌹𐍃𐌺",
        key: 0x10330,
        sample: "𐌰𐌱𐌲𐌳𐌴𐌵",
        spans: &[
            R(0x10330, 0x1034A),
        ],
    },
    Orthography {
        name: "Bamum",
        native: "ꚠꚡꚢꚣ",
        key: 0xA6A0,
        sample: "ꚠꚡꚢꚣ",
        spans: &[
            R(0xA6A0, 0xA6F7),
        ],
    },
    Orthography {
        name: "Brāhmī",
        native: "Brāhmī",
        key: 0x11005,
        sample: "𑀩𑀼𑀤𑀥𑀁 𑀲𑀭𑀡𑀁 𑀕𑀘𑀙𑀫𑀺",
        spans: &[
            R(0x11000, 0x1104D), R(0x11052, 0x1106F),
        ],
    },
    Orthography {
        name: "Surat Batak",
        native: "Surat Batak",
        key: 0x1BC0,
        sample: "ᯀᯁᯂᯃᯄᯅᯆᯇᯈᯉ",
        spans: &[
            R(0x1BC0, 0x1BF3), R(0x1BFC, 0x1BFF),
        ],
    },
    Orthography {
        name: "Balinese",
        native: "Balinese",
        key: 0x1B05,
        sample: "ᬅᬆᬇᬈᬉᬊᬋᬌ",
        spans: &[
            R(0x1B00, 0x1B4B), R(0x1B50, 0x1B7C),
        ],
    },
    Orthography {
        name: "Buginese",
        native: "Buginese",
        key: 0x1A00,
        sample: "ᨀᨁᨂᨃᨄᨅᨆᨇᨈᨉ",
        spans: &[
            R(0x1A00, 0x1A1B), R(0x1A1E, 0x1A1F),
        ],
    },
    Orthography {
        name: "Cham",
        native: "Cham",
        key: 0xAA00,
        sample: "ꨀꨁꨂꨃꨄꨅꨆꨇꨉ",
        spans: &[
            R(0xAA00, 0xAA36), R(0xAA40, 0xAA4D), R(0xAA50, 0xAA59), R(0xAA5C, 0xAA5F),
        ],
    },
    Orthography {
        name: "Javanese",
        native: "Javanese",
        key: 0xA98F,
        sample: "ꦏꦐꦑꦒꦓꦔꦖꦗꦘ",
        spans: &[
            R(0xA980, 0xA9CD), R(0xA9CF, 0xA9D9), R(0xA9DE, 0xA9DF),
        ],
    },
    Orthography {
        name: "Kayah Li",
        native: "Kayah Li",
        key: 0xA90A,
        sample: "ꤊꤋꤌꤍꤎꤏꤐꤑꤒ",
        spans: &[
            R(0xA900, 0xA92F),
        ],
    },
    Orthography {
        name: "Rejang",
        native: "Rejang",
        key: 0xA930,
        sample: "ꤰꤱꤲꤳᤴꤵꤶꤷꤸꤹ",
        spans: &[
            R(0xA930, 0xA953), S(0xA95F),
        ],
    },
    Orthography {
        name: "Sundanese",
        native: "Sundanese",
        key: 0x1B8A,
        sample: "ᮊᮋᮌᮍᮎᮏᮐᮑᮒ",
        spans: &[
            R(0x1B80, 0x1BAA), R(0x1BAE, 0x1BB9),
        ],
    },
    Orthography {
        name: "Tai Viet",
        native: "Tai Viet",
        key: 0xAA80,
        sample: "ꪀꪁꪂꪃꪄꪅꪆꪇꪈꪉ",
        spans: &[
            R(0xAA80, 0xAAC2), R(0xAADB, 0xAADF),
        ],
    },
    Orthography {
        name: "Old South Arabian",
        native: "Old South Arabian",
        key: 0x10A60,
        sample: "ğ© ğ©¡ğ©¢ğ©£ğ©¤ğ©¥ğ©¦ğ©§ğ©¨ğ©©",
        spans: &[
            R(0x10A60, 0x10A7F),
        ],
    },
    Orthography {
        name: "Linear B Ideograms",
        native: "Linear B Ideograms",
        key: 0x10080,
        sample: "𐂀𐂁𐂂𐂃𐂄𐂅",
        spans: &[
            R(0x10080, 0x100FA),
        ],
    },
    Orthography {
        name: "Linear B Syllabary",
        native: "Linear B Syllabary",
        key: 0x10000,
        sample: "𐀀𐀁𐀂𐀃𐀄𐀅",
        spans: &[
            R(0x10000, 0x1000B), R(0x1000D, 0x10026), R(0x10028, 0x1003A), S(0x1003C),
            S(0x1003D), R(0x1003F, 0x1004D), R(0x10050, 0x1005D),
        ],
    },
    Orthography {
        name: "Cypriot Syllabary",
        native: "Cypriot Syllabary",
        key: 0x10800,
        sample: "𐠂𐠁𐠀𐠃𐠄𐠅",
        spans: &[
            R(0x10800, 0x10805), S(0x10808), R(0x1080A, 0x10835), S(0x10837), S(0x10838),
            S(0x1083C), S(0x1083F),
        ],
    },
    Orthography {
        name: "Meroitic Hieroglyphs",
        native: "Meroitic Hieroglyphs",
        key: 0x10980,
        sample: "ê¶Äê¶Åê¶Çê¶Éê¶Ñê¶Ö",
        spans: &[
            R(0x10980, 0x1099F),
        ],
    },
    Orthography {
        name: "MeroiticCursive",
        native: "MeroiticCursive",
        key: 0x109A0,
        sample: "𐦠𐦡𐦢𐦣𐦤𐦥",
        spans: &[
            R(0x109A0, 0x109B7), S(0x109BE), S(0x109BF),
        ],
    },
    Orthography {
        name: "Egyptian Hieroglyphs",
        native: "Egyptian Hieroglyphs",
        key: 0x13000,
        sample: "ğ“€€ğ“ƒœğ“¾ğ“†«ğ“†§ğ“¸",
        spans: &[
            R(0x13000, 0x1342E),
        ],
    },
];

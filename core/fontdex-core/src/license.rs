//! License classification from free-text font strings (made by FontLab https://www.fontlab.com/)
//!
//! Fonts rarely say "this is OFL" in a machine-readable way. They tuck the
//! license into a copyright notice, a license description record, or a URL,
//! and they phrase it however they like. The classifier walks a fixed table
//! of known licenses and keyword fragments, in order, and the first fragment
//! found in any of the three inputs names the license.
//!
//! Order matters. "GPL with font exception" must be tried before the plain
//! GNU GPL entry, and "CC-BY-SA" before "CC-BY", because the later entries'
//! keywords are substrings of the earlier ones' texts.

/// One row of the license table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct License {
    pub name: &'static str,
    pub url: Option<&'static str>,
    pub keywords: &'static [&'static str],
}

impl License {
    /// The catch-all row matched when nothing else does.
    pub fn is_unknown(&self) -> bool {
        self.keywords.is_empty()
    }
}

pub const UNKNOWN_LICENSE: &str = "Unknown License";

pub static LICENSES: &[License] = &[
    License {
        name: "Aladdin Free Public License",
        url: Some("http://pages.cs.wisc.edu/~ghost/doc/AFPL/6.01/Public.htm"),
        keywords: &["Aladdin"],
    },
    License {
        name: "Apache 2.0",
        url: Some("http://www.apache.org/licenses/LICENSE-2.0"),
        keywords: &["Apache", "Apache License", "Apache 2 License"],
    },
    License {
        name: "Arphic Public License",
        url: Some("http://ftp.gnu.org/gnu/non-gnu/chinese-fonts-truetype/LICENSE"),
        keywords: &[
            "ARPHIC PUBLIC LICENSE",
            "Arphic Public License",
            "文鼎公眾授權書",
            "Arphic",
        ],
    },
    License {
        name: "Bitstream Vera License",
        url: Some("http://www-old.gnome.org/fonts/#Final_Bitstream_Vera_Fonts"),
        keywords: &["Bitstream", "Vera", "DejaVu"],
    },
    License {
        name: "CC-BY-SA",
        url: Some("http://creativecommons.org/licenses/by-sa/3.0/"),
        keywords: &[
            "Creative Commons Attribution ShareAlike",
            "Creative-Commons-Attribution-ShareAlike",
            "Creative Commons Attribution Share Alike",
            "Creative-Commons-Attribution-Share-Alike",
            "Creative Commons BY SA",
            "Creative-Commons-BY-SA",
            "CC BY SA",
            "CC-BY-SA",
        ],
    },
    License {
        name: "CC-BY",
        url: Some("http://creativecommons.org/licenses/by/3.0/"),
        keywords: &[
            "Creative Commons Attribution",
            "Creative-Commons-Attribution",
            "CC BY",
            "CC-BY",
        ],
    },
    License {
        name: "CC-0",
        url: Some("http://creativecommons.org/publicdomain/zero/1.0/"),
        keywords: &[
            "Creative Commons Zero",
            "Creative-Commons-Zero",
            "Creative Commons 0",
            "Creative-Commons-0",
            "CC Zero",
            "CC-Zero",
            "CC 0",
            "CC-0",
        ],
    },
    License {
        name: "Freeware",
        url: Some("http://en.wikipedia.org/wiki/Freeware"),
        keywords: &["freeware", "free ware"],
    },
    License {
        name: "GPL with font exception",
        url: Some("http://www.gnu.org/copyleft/gpl.html"),
        keywords: &[
            "LiberationFontLicense",
            "with font exception",
            "Liberation font software",
            "LIBERATION is a trademark of Red Hat",
            "this font does not by itself cause the resulting document to be covered by the GNU",
        ],
    },
    License {
        name: "GNU General Public License",
        url: Some("http://www.gnu.org/copyleft/gpl.html"),
        keywords: &[
            "GPL",
            "GNU Public License",
            "GNU GENERAL PUBLIC LICENSE",
            "GNU General Public License",
            "General Public License",
            "GNU copyleft",
            "GNU",
            "www.gnu.org",
            "Licencia Pública General de GNU",
            "free as in free-speech",
            "free as in free speech",
            "languagegeek.com",
        ],
    },
    License {
        name: "GNU Lesser General Public License",
        url: Some("http://www.gnu.org/licenses/lgpl.html"),
        keywords: &[
            "LGPL",
            "GNU Lesser General Public License",
            "Lesser General Public License",
        ],
    },
    License {
        name: "GUST Font License",
        url: Some("http://tug.org/fonts/licenses/GUST-FONT-LICENSE.txt"),
        keywords: &["GUST"],
    },
    License {
        name: "IPA",
        url: Some("http://opensource.org/licenses/ipafont.html"),
        keywords: &[
            "IPA License",
            "Information-technology Promotion Agency",
            "(IPA)",
            " IPA ",
        ],
    },
    License {
        name: "M+ Fonts Project License",
        url: Some("http://mplus-fonts.sourceforge.jp/webfonts/#license"),
        keywords: &["M+ FONTS PROJECT"],
    },
    License {
        name: "MIT License",
        url: Some("http://www.opensource.org/licenses/mit-license.php"),
        keywords: &["M.I.T.", "Software without restriction,"],
    },
    License {
        name: "Magenta Open License",
        url: Some("http://www.ellak.gr/pub/fonts/mgopen/index.en.html#license"),
        keywords: &["MgOpen"],
    },
    License {
        name: "Monotype Imaging EULA",
        url: Some("http://www.fonts.com/info/legal/eula/monotype-imaging"),
        keywords: &[
            "valuable asset of Monotype",
            "Monotype Typography",
            "www.monotype.com",
        ],
    },
    License {
        name: "SIL Open Font License",
        url: Some("http://scripts.sil.org/OFL"),
        keywords: &[
            "OFL",
            "OPEN FONT LICENSE",
            "Open Font License",
            "open font license",
            "scripts.sil.org/OFL",
            "openfont",
            "open font",
            "NHN Corporation",
            "American Mathematical Society",
            "http://www.ams.org",
        ],
    },
    License {
        name: "Public Domain (not a license)",
        url: Some("http://en.wikipedia.org/wiki/Public_domain"),
        keywords: &["public domain", "Public Domain"],
    },
    License {
        name: "STIX Font License",
        url: Some("http://www.aip.org/stixfonts/user_license.html"),
        keywords: &[
            "2007 by the STI Pub Companies",
            "the derivative work will carry a different name",
        ],
    },
    License {
        name: "Ubuntu Font License 1.0",
        url: Some("http://font.ubuntu.com/ufl/ubuntu-font-licence-1.0.txt"),
        keywords: &["Ubuntu Font Licence 1.0", "UBUNTU FONT LICENCE Version 1.0"],
    },
    License {
        name: "License to TeX Users Group for the Utopia Typeface",
        url: Some("http://tug.org/fonts/utopia/LICENSE-utopia.txt"),
        keywords: &["The Utopia fonts are freely available; see http://tug.org/fonts/utopia"],
    },
    License {
        name: "XFree86 License",
        url: Some("http://www.xfree86.org/legal/licenses.html"),
        keywords: &["XFree86", "X Consortium"],
    },
    License {
        name: UNKNOWN_LICENSE,
        url: None,
        keywords: &[],
    },
];

/// Picks the license row for the given texts.
///
/// Each keyword is checked against the copyright, license and URL texts as a
/// case-sensitive substring. The first hit in table order wins; with no hit
/// the "Unknown License" row comes back. Never fails.
pub fn classify(
    license: Option<&str>,
    copyright: Option<&str>,
    url: Option<&str>,
) -> &'static License {
    let texts = [copyright, license, url];
    for entry in LICENSES {
        for keyword in entry.keywords {
            if texts.iter().flatten().any(|text| text.contains(keyword)) {
                return entry;
            }
        }
    }
    unknown()
}

fn unknown() -> &'static License {
    &LICENSES[LICENSES.len() - 1]
}

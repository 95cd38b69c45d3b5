//! Vendor name resolution (made by FontLab https://www.fontlab.com/)
//!
//! Two sources can name a font's vendor: the four-byte `achVendID` in the
//! OS/2 table, and free text such as a manufacturer record or a PostScript
//! notice. IDs are compared byte for byte against a registry; free text is
//! scanned for well-known foundry names. Both tables are ordered and the
//! first match wins.

/// Display name used when nothing identifies the vendor.
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";

/// Foundry names to look for inside notices, first match wins.
pub static NOTICE_VENDORS: &[(&str, &str)] = &[
    ("Bigelow", "Bigelow & Holmes"),
    ("Adobe", "Adobe"),
    ("Bitstream", "Bitstream"),
    ("Monotype", "Monotype Imaging"),
    ("Linotype", "Linotype GmbH"),
    ("LINOTYPE-HELL", "Linotype GmbH"),
    ("IBM", "IBM"),
    ("URW", "URW"),
    ("International Typeface Corporation", "ITC"),
    ("Tiro Typeworks", "Tiro Typeworks"),
    ("XFree86", "XFree86"),
    ("Microsoft", "Microsoft Corporation"),
    ("Omega", "Omega"),
    ("Font21", "Hwan"),
    ("HanYang System", "HanYang Information & Communication"),
];

/// Registered OS/2 vendor IDs, space padded to four bytes.
pub static VENDOR_IDS: &[([u8; 4], &str)] = &[
    (*b"!ETF", "!Exclamachine Type Foundry"),
    (*b"$pro", "CheapProFonts"),
    (*b"1ASC", "Ascender Corporation"),
    (*b"1BOU", "Boutros International"),
    (*b"2DLT", "2D Typo"),
    (*b"2REB", "2Rebels"),
    (*b"39BC", "Finley's Barcode Fonts"),
    (*b"3ip ", "Three Islands Press"),
    (*b"4FEB", "4th february"),
    (*b"5PTS", "Five Points Technology"),
    (*b"918 ", "RavenType"),
    (*b"A&S ", "Art&Sign Studio"),
    (*b"A2  ", "A2-Type"),
    (*b"aaff", "AstroAcademia Font Foundry"),
    (*b"ABBO", "Arabic Dictionary Lab"),
    (*b"ABC ", "Altek Instruments"),
    (*b"ABOU", "Aboutype, Inc."),
    (*b"ACUT", "Acute Type"),
    (*b"ADBE", "Adobe"),
    (*b"ADBO", "Adobe"),
    (*b"ADG ", "Apply Design Group"),
    (*b"AEF ", "Altered Ego Fonts"),
    (*b"AGFA", "Monotype Imaging (replaced by MONO)"),
    (*b"AID ", "Artistic Imposter Design"),
    (*b"AJPT", "Alan Jay Prescott Typography"),
    (*b"AKOF", "AKOFAType"),
    (*b"ALFA", "Alphabets"),
    (*b"ALPH", "Alphameric Broadcast Solutions Limited"),
    (*b"ALPN", "Alpona Portal"),
    (*b"ALS ", "Art. Lebedev Studio"),
    (*b"alte", "Altemus"),
    (*b"ALTS", "Altsys / Made with Fontographer"),
    (*b"AMUT", "Kwesi Amuti"),
    (*b"ANDO", "Osam Ando"),
    (*b"anty", "Anatoletype"),
    (*b"AOP ", "an Art Of Pengwyn"),
    (*b"APLY", "Apply Interactive"),
    (*b"APOS", "Apostrophic Laboratories"),
    (*b"APPL", "Apple"),
    (*b"ARBX", "Arabetics"),
    (*b"ARCH", "Architext"),
    (*b"ARPH", "Arphic Technology Co."),
    (*b"ARS ", "EN ARS Ltd."),
    (*b"ArTy", "Archive Type"),
    (*b"ASL ", "Abneil Software Ltd fonts"),
    (*b"ASSA", "astype"),
    (*b"ASYM", "Applied Symbols"),
    (*b"ATEC", "Page Technology Marketing, Inc."),
    (*b"ATF ", "American Type Founders Collection"),
    (*b"ATF1", "Australian Type Foundry"),
    (*b"ATFS", "Andrew Tyler's fonts"),
    (*b"AURE", "Aure Font Design"),
    (*b"AUTO", "Autodidakt"),
    (*b"AVFF", "Agustín Varela Font Factory"),
    (*b"AVP ", "Aviation Partners"),
    (*b"AZLS", "Azalea Software, Inc."),
    (*b"B&H ", "Bigelow & Holmes"),
    (*b"BARS", "CIA (BAR CODES) UK"),
    (*b"BASE", "Baseline Fonts"),
    (*b"BAT ", "BUREAU DES AFFAIRES TYPOGRAPHIQUES"),
    (*b"BCP ", "Barcode Products Ltd"),
    (*b"BDX ", "Studio Christian Bordeaux"),
    (*b"BERT", "Berthold"),
    (*b"BITM", "Bitmap Software"),
    (*b"BITS", "Bitstream"),
    (*b"bizf", "Bizfonts.com"),
    (*b"BLAB", "BaseLab"),
    (*b"BLAH", "Mister Bla's Fontworx"),
    (*b"BLI ", "Blissym Language Institute"),
    (*b"BOLD", "Bold Monday"),
    (*b"BORW", "em2 Solutions"),
    (*b"BOYB", "BoyBeaver Fonts"),
    (*b"BRDV", "BoardVantage, Inc."),
    (*b"BREM", "Mark Bremmer"),
    (*b"BROS", "Michael Brosnan"),
    (*b"BRTC", "ITSCO - Bar Code Fonts"),
    (*b"BS  ", "Barcodesoft"),
    (*b"BUBU", "BUBULogix"),
    (*b"BWFW", "B/W Fontworks"),
    (*b"C&B ", "Coppers & Brasses"),
    (*b"C&C ", "Carter & Cone"),
    (*b"C21 ", "Club 21"),
    (*b"CAK ", "pluginfonts.com"),
    (*b"CANO", "Canon"),
    (*b"CASL", "H.W. Caslon & Company Ltd."),
    (*b"CB  ", "Christian Büning"),
    (*b"CBDO", "Borges Lettering & Design"),
    (*b"CDAC", "Centre for Development of Advanced Computing"),
    (*b"cdd ", "Crazy Diamond Design"),
    (*b"CDFP", "VT2000 Technical Services"),
    (*b"CELB", "Celebrity Fontz"),
    (*b"CF  ", "Colophon Foundry"),
    (*b"CFA ", "Computer Fonts Australia"),
    (*b"CFF ", "Characters Font Foundry"),
    (*b"CJCJ", "Creative Juncture"),
    (*b"CKTP", "CakeType"),
    (*b"CLM ", "Culmus Project"),
    (*b"CMJK", "Slanted Hall"),
    (*b"COMM", "Commercial Type"),
    (*b"CONR", "Connare.com"),
    (*b"COOL", "Cool Fonts"),
    (*b"CORD", "corduroy"),
    (*b"CR8 ", "CR8 Software Solutions"),
    (*b"CRRT", "Carrot Type"),
    (*b"CT  ", "CastleType"),
    (*b"CTDL", "China Type Designs Ltd."),
    (*b"CTL ", "Chaitanya Type Library"),
    (*b"cwwf", "Computers World Wide/AC Capital Funding"),
    (*b"CYPE", "Club Type"),
    (*b"DADA", "Dada Studio"),
    (*b"DAMA", "Dalton Maag Limited"),
    (*b"DB  ", "Daniel Bruce"),
    (*b"DBFF", "DesignBase"),
    (*b"DD  ", "Devon DeLapp"),
    (*b"Deco", "DecoType (replaced by DT)"),
    (*b"DELV", "Delve Fonts"),
    (*b"dezc", "Dezcom"),
    (*b"DFS ", "Datascan Font Service Ltd"),
    (*b"DGL ", "Digital Graphic Labs foundry"),
    (*b"DOM ", "Dukom Design"),
    (*b"DS  ", "Dainippon Screen Mfg. Co., Inc."),
    (*b"DSBV", "Datascan bv"),
    (*b"DSCI", "Design Science Inc."),
    (*b"DSGN", "DizajnDesign"),
    (*b"DSKY", "Jacek Dziubinski"),
    (*b"DSSR", "Dresser Johnson"),
    (*b"DSST", "Dubina Nikolay"),
    (*b"DST ", "DSType"),
    (*b"DT  ", "DecoType"),
    (*b"DTC ", "Digital Typeface Corp."),
    (*b"DTF ", "Dunwich Type Founders"),
    (*b"DTL ", "Dutch Type Library"),
    (*b"DTPS", "DTP-Software"),
    (*b"dtpT", "dtpTypes Limited"),
    (*b"DUXB", "Duxbury Systems, Inc."),
    (*b"DYNA", "DynaComware"),
    (*b"EDBI", "edilbiStudio"),
    (*b"EDGE", "Rivers Edge Corp."),
    (*b"EF  ", "Elsner+Flake"),
    (*b"EFF ", "Electronic Font Foundry"),
    (*b"EFI ", "Elfring Fonts Inc."),
    (*b"EFNT", "E Fonts L.L.C."),
    (*b"EFWS", "eFilm World"),
    (*b"EKIO", "Ekioh"),
    (*b"ELSE", "Elseware"),
    (*b"EMGR", "Emigre"),
    (*b"EPSN", "Epson"),
    (*b"ESIG", "E-Signature"),
    (*b"ETIO", "Ethiopian Font Foundry"),
    (*b"EVER", "Evertype"),
    (*b"FA  ", "FontArte Type Foundry"),
    (*b"FAT ", "Fatype"),
    (*b"FBI ", "The Font Bureau, Inc."),
    (*b"FCAB", "The Font Cabinet"),
    (*b"FCAN", "fontage canada"),
    (*b"FCTP", "Facetype"),
    (*b"FDI ", "FDI fonts.info"),
    (*b"FeoN", "Feòrag NìcBhrìde"),
    (*b"FGOD", "FontGod"),
    (*b"FJTY", "Frank Jonen - Illustration & Typography"),
    (*b"FMFO", "Fontmill Foundry"),
    (*b"FMST", "Formist"),
    (*b"FNTF", "Fontfoundry"),
    (*b"FoFa", "FontFabrik"),
    (*b"FONT", "Font Source"),
    (*b"FORM", "Formation Type Foundry"),
    (*b"FOUN", "The Foundry"),
    (*b"FRML", "formlos"),
    (*b"FRTH", "Forthcome"),
    (*b"FS  ", "Formula Solutions"),
    (*b"FSE ", "Font Source Europe"),
    (*b"FSI ", "FontShop International"),
    (*b"FSL ", "FontSurfer Ltd"),
    (*b"fsmi", "Fontsmith"),
    (*b"FTFT", "FontFont"),
    (*b"FTGD", "Font Garden"),
    (*b"FTH ", "For the Hearts"),
    (*b"FTN ", "Fountain"),
    (*b"FTPT", "Fontpartners"),
    (*b"FWKS", "Fontworks"),
    (*b"FWRE", "Fontware Limited"),
    (*b"FY  ", "Fontyou"),
    (*b"GAF ", "Glifo Art Fonts Inc."),
    (*b"GALA", "Galápagos Design Group, Inc."),
    (*b"GALO", "Gerald Gallo"),
    (*b"GARI", "Gary Ritchie"),
    (*b"GATF", "Greater Albion Typefounders"),
    (*b"GD  ", "GD Fonts"),
    (*b"GF  ", "GarageFonts"),
    (*b"GIA ", "Georgian Internet Avenue"),
    (*b"GLCF", "GLC foundry"),
    (*b"GLYF", "Glyph Systems"),
    (*b"GNU ", "Free Software Foundation, Inc."),
    (*b"GOAT", "Dingbat Dungeon"),
    (*b"GOGO", "Fonts-A-Go-Go"),
    (*b"GOHE", "GoHebrew, division of GoME2.com Inc."),
    (*b"GOOG", "Google"),
    (*b"GPI ", "Gamma Productions, Inc."),
    (*b"GRAF", "Grafikarna d.o.o."),
    (*b"GREY", "Greyletter"),
    (*b"GRIL", "Grilled cheese"),
    (*b"GRIM", "Legacy publishing"),
    (*b"grro", "grafikk RØren"),
    (*b"GT  ", "Graphity!"),
    (*b"GTYP", "G-Type"),
    (*b"H   ", "Hurme Design"),
    (*b"H&FJ", "Hoefler & Frere-Jones"),
    (*b"HA  ", "HoboArt"),
    (*b"HAD ", "Hoffmann Angelic Design"),
    (*b"HAIL", "Hail Design"),
    (*b"HanS", "HanStyle"),
    (*b"HAUS", "TypeHaus"),
    (*b"HEB ", "Sivan Toledo"),
    (*b"HFJ ", "Hoefler & Frere-Jones (replaced by H&FJ)"),
    (*b"HIH ", "HiH Retrofonts"),
    (*b"HILL", "Hill Systems"),
    (*b"HJZ ", "Hans J. Zinken"),
    (*b"HL  ", "High-Logic"),
    (*b"HM  ", "Haiku Monkey"),
    (*b"HoP ", "House of Pretty"),
    (*b"HOUS", "House Industries"),
    (*b"HP  ", "Hewlett-Packard"),
    (*b"HS  ", "HermesSOFT Company"),
    (*b"HT  ", "Huerta Tipográfica"),
    (*b"HTF ", "The Hoefler Type Foundry, Inc."),
    (*b"HXTP", "Hexatype"),
    (*b"HY  ", "HanYang Information & Communication"),
    (*b"IBM ", "IBM"),
    (*b"IDAU", "IDAutomation.com, Inc."),
    (*b"IDEE", "IDEE TYPOGRAFICA"),
    (*b"IDF ", "International Digital Fonts"),
    (*b"IFF ", "Indian Font Factory"),
    (*b"IKOF", "IKOffice GmbH"),
    (*b"ILP ", "Indigenous Languages Project"),
    (*b"IMPR", "Impress"),
    (*b"INGT", "Ingrimayne Type"),
    (*b"INRA", "INRAY Inc."),
    (*b"INTR", "Interstitial Entertainment"),
    (*b"INVC", "Invoice Central"),
    (*b"INVD", "TYPE INVADERS"),
    (*b"ISE ", "ISE-Aditi Info. Pvt . Ltd."),
    (*b"ITC ", "ITC"),
    (*b"ITF ", "Red Rooster Collection (ITF, Inc.)"),
    (*b"ITFO", "Indian Type Foundry"),
    (*b"JABM", "JAB'M Foundry"),
    (*b"JAF ", "Just Another Foundry"),
    (*b"JAKE", "Jake Tilson Studio"),
    (*b"JBLT", "JEAN-BAPTISTE LEVÉE TYPOGRAPHY"),
    (*b"JDB ", "Jeff Bensch"),
    (*b"JF  ", "Jan Fromm"),
    (*b"JHA ", "Jan Henrik Arnold"),
    (*b"JHF ", "JH Fonts"),
    (*b"JPTT", "Jeremy Tankard Typography Ltd"),
    (*b"JWTM", "Type Matters"),
    (*b"JY  ", "JIYUKOBO Ltd."),
    (*b"KATF", "Kingsley/ATF"),
    (*b"KBNT", "Kombinat-Typefounders"),
    (*b"KDW ", "Kataoka Design Works"),
    (*b"KF  ", "Karakta Fonthome"),
    (*b"KLIM", "Klim Typographic Design"),
    (*b"KLTF", "Karsten Luecke"),
    (*b"KNST", "Konst.ru"),
    (*b"KOP ", "Leo Koppelkamm"),
    (*b"KORK", "Khork OÜ"),
    (*b"KOVL", "Koval Type Foundry"),
    (*b"KrKo", "Kreative Software"),
    (*b"KRND", "Karandash Type & Graphics Foundry"),
    (*b"KTF ", "Kustomtype"),
    (*b"KUBA", "Kuba Tatarkiewicz"),
    (*b"LAIT", "la laiterie"),
    (*b"LANS", "Lanston Type Company"),
    (*b"LARA", "Larabiefonts"),
    (*b"LAUD", "Carolina Laudon"),
    (*b"LAYT", "LAYOUT SARL"),
    (*b"LEAF", "Interleaf, Inc."),
    (*b"LETR", "Letraset"),
    (*b"LFS ", "Letters from Sweden"),
    (*b"LGX ", "Logix Research Institute, Inc."),
    (*b"LHF ", "Letterhead Fonts"),
    (*b"LING", "Linguist's Software"),
    (*b"LINO", "Linotype GmbH"),
    (*b"LIVE", "Livedesign"),
    (*b"LNGU", "LangusteFonts"),
    (*b"LNTO", "Lineto"),
    (*b"LORO", "LoRo Productions"),
    (*b"LP  ", "LetterPerfect Fonts"),
    (*b"LT  ", "Le Typophage"),
    (*b"LTF ", "Liberty Type Foundry"),
    (*b"Ltrm", "Lettermin type and design"),
    (*b"LTRX", "Lighttracks"),
    (*b"LTTR", "LettError"),
    (*b"LUD ", "Ludlow"),
    (*b"LuFo", "LucasFonts"),
    (*b"LUSH", "Lush Type"),
    (*b"LUV ", "iLUVfonts"),
    (*b"MACR", "Macromedia / Made with Fontographer"),
    (*b"MADT", "MADType"),
    (*b"MAPS", "Tom Mouat's Map Symbol Fonts"),
    (*b"MATS", "Match Fonts"),
    (*b"MC  ", "Cerajewski Computer Consulting"),
    (*b"MCKL", "MCKL"),
    (*b"MCOW", "Mountaincow"),
    (*b"MDSN", "Moraitis Design"),
    (*b"MEH ", "Steve Mehallo"),
    (*b"MEIR", "Meir Sadan"),
    (*b"MESA", "FontMesa,"),
    (*b"MF  ", "Magic Fonts"),
    (*b"MFNT", "Masterfont"),
    (*b"MG  ", "Milieu Grotesque"),
    (*b"MILL", "Millan"),
    (*b"MJ  ", "Majus Corporation"),
    (*b"MJR ", "Majur Inc."),
    (*b"MLBU", "Malibu Dream Designs, LLC"),
    (*b"MLGC", "Micrologic Software"),
    (*b"mlss", "Mark Simonson Studio LLC"),
    (*b"MMFT", "Michel M."),
    (*b"MMIK", "Monomonnik"),
    (*b"MNCK", "Mine Creek"),
    (*b"MODI", "Modular Infotech Private Limited."),
    (*b"MOHT", "Al Mohtaraf Assaudi Ltd"),
    (*b"MOJI", "Mojijuku"),
    (*b"MONB", "Monib"),
    (*b"MONE", "Meta One Limited"),
    (*b"MONO", "Monotype Imaging"),
    (*b"MOON", "Moonlight Type and Technolog"),
    (*b"MOTA", "Mota Italic"),
    (*b"MRSW", "Morisawa & Company, Ltd."),
    (*b"MRV ", "Morovia Corporation"),
    (*b"MS  ", "Microsoft Corp."),
    (*b"MSCH", "Guitar-Injection"),
    (*b"MSCR", "Majus Corporation"),
    (*b"MSE ", "MSE-iT"),
    (*b"MT  ", "Monotype Imaging (replaced by MONO)"),
    (*b"MTF ", "Miss Tiina Fonts"),
    (*b"MTY ", "Motoya Co. ,LTD."),
    (*b"MUTF", "Murasu Systems Sdn. Bhd"),
    (*b"MVB ", "MVB Fonts"),
    (*b"MVTP", "Mauve Type"),
    (*b"MVty", "MV Typo"),
    (*b"MYFO", "MyFonts.com"),
    (*b"NB  ", "No Bodoni Typography"),
    (*b"ncnd", "&cond"),
    (*b"NDCT", "Neufville Digital Corporatype"),
    (*b"NDTC", "Neufville Digital"),
    (*b"NEC ", "NEC Corporation"),
    (*b"NEWL", "Newlyn"),
    (*b"NICK", "Nick's Fonts"),
    (*b"NIS ", "NIS Corporation"),
    (*b"NORF", "Norfok Incredible Font Design"),
    (*b"NOVA", "NOVATYPE"),
    (*b"NP  ", "Nipponia"),
    (*b"OHG ", "Our House Graphic Design"),
    (*b"OKAY", "Okay Type Foundry"),
    (*b"OPTM", "Optimo"),
    (*b"OPTO", "Opto"),
    (*b"ORBI", "Orbit Enterprises, Inc."),
    (*b"ORK1", "Ork1"),
    (*b"OURT", "Ourtype"),
    (*b"P22 ", "P22 Inc."),
    (*b"PARA", "ParaType Inc."),
    (*b"PD  ", "Pangea design"),
    (*b"PDWX", "Parsons Design Workx"),
    (*b"PECI", "Pecita"),
    (*b"PF  ", "Phil's Fonts, Inc."),
    (*b"PIXL", "Pixilate"),
    (*b"PKDD", "Philip Kelly Digital Design"),
    (*b"PLAT", "PLATINUM technology"),
    (*b"PRFS", "Production First Software"),
    (*b"PRGR", "Paragraph"),
    (*b"PROD", "Production Type"),
    (*b"PRTF", "Process Type Foundry"),
    (*b"PSIS", "PhotoShopIsland.com"),
    (*b"PSY ", "PSY/OPS"),
    (*b"PT  ", "Playtype APS"),
    (*b"PTF ", "Porchez Typofonderie"),
    (*b"PTMI", "Page Technology Marketing, Inc."),
    (*b"PTYP", "preussTYPE"),
    (*b"PYRS", "PYRS   Fontlab Ltd. / Made with FontLab"),
    (*b"QMSI", "QMS/Imagen"),
    (*b"QRAT", "Quadrat Communications"),
    (*b"READ", "ReadyType"),
    (*b"REAL", "Underware"),
    (*b"RES ", "Resultat"),
    (*b"RJPS", "Reall Graphics"),
    (*b"RKFN", "R K Fonts"),
    (*b"RL  ", "Ruben Holthuijsen"),
    (*b"RLTF", "Rebeletter Studios"),
    (*b"RMU ", "RMU TypeDesign"),
    (*b"robo", "Buro Petr van Blokland"),
    (*b"RRT ", "Red Rooster Collection (ITF, Inc.)"),
    (*b"RSJ ", "RSJ Software"),
    (*b"RST ", "Rosetta"),
    (*b"RUDY", "RudynFluffy"),
    (*b"RYOB", "Ryobi Limited"),
    (*b"SAND", "Sandoll"),
    (*b"SAPL", "Fonderie sans plomb"),
    (*b"SATY", "Samuelstype Design AB"),
    (*b"SAX ", "s.a.x. Software gmbh"),
    (*b"SbB ", "Sketchbook B"),
    (*b"SBT ", "SelfBuild Type Foundry"),
    (*b"SCTO", "Schick Toikka"),
    (*b"Sean", "The FontSite"),
    (*b"SFS ", "Sarumadhu Services Pvt. Ltd."),
    (*b"SFUN", "Software Union"),
    (*b"SG  ", "Scooter Graphics"),
    (*b"SHAM", "ShamFonts / Shamrock Int."),
    (*b"SHFT", "Shift"),
    (*b"SHOT", "Shotype"),
    (*b"SHUB", "The Software Hub"),
    (*b"SIG ", "vLetter, Inc"),
    (*b"SIL ", "SIL International (SIL)"),
    (*b"SIT ", "Summit Information Technologies Pvt.Ltd,"),
    (*b"SKP ", "Essqué Productions"),
    (*b"skz ", "Celtic Lady's Fonts"),
    (*b"SL  ", "Silesian Letters"),
    (*b"SN  ", "SourceNet"),
    (*b"SOHO", "Soft Horizons"),
    (*b"SOS ", "Standing Ovations Software"),
    (*b"STC ", "Sorkin Type Co"),
    (*b"STF ", "Brian Sooy & Co + Sooy Type Foundry"),
    (*b"Stor", "Storm Type Foundry"),
    (*b"STYP", "Stone Type Foundry"),
    (*b"SUNW", "sunwalk fontworks"),
    (*b"SVTD", "Synthview"),
    (*b"SWFT", "Swfte International"),
    (*b"SWTY", "Swiss Typefaces"),
    (*b"SXRA", "Page42 Type Foundry"),
    (*b"SYDA", "Shree Muktananda Ashram"),
    (*b"SYN ", "SynFonts"),
    (*b"SYRC", "Syriac Computing Institute"),
    (*b"TBFF", "TrueBlue Font Foundry"),
    (*b"TC  ", "Typeco"),
    (*b"TCH ", "Darryl Cook"),
    (*b"TD  ", "Typedepot"),
    (*b"TDR ", "Tansin A. Darcos & Co."),
    (*b"TERM", "Terminal Design, Inc."),
    (*b"TF  ", "Treacyfaces / Headliners"),
    (*b"TF3D", "TattooFont3D"),
    (*b"TFND", "Typefounding"),
    (*b"THIN", "Thinstroke Design LLC"),
    (*b"TILD", "Tilde, SIA"),
    (*b"TIMO", "Tim Romano"),
    (*b"TIMR", "Tim Rolands"),
    (*b"TIPO", "Tipo"),
    (*b"TIRO", "Tiro Typeworks"),
    (*b"TJS ", "Typejockeys"),
    (*b"TLIN", "Teeline Fonts"),
    (*b"TMF ", "The MicroFoundry"),
    (*b"TMT ", "TypeMyType Comm. V."),
    (*b"TNTY", "tntypography"),
    (*b"TOPP", "Toppan Printing Co., Ltd."),
    (*b"TPDP", "Type Department"),
    (*b"TPMA", "typoma"),
    (*b"TPSP", "Type Supply"),
    (*b"TPTC", "Test Pilot Collective"),
    (*b"TPTQ", "Typotheque"),
    (*b"TR  ", "Type Revivals"),
    (*b"TRAF", "Traffictype"),
    (*b"TREE", "Treeflow"),
    (*b"TS  ", "TamilSoft Corporation"),
    (*b"TSPC", "Typespec Ltd"),
    (*b"TSTY", "Torleiv Georg Sverdrup"),
    (*b"TT  ", "TypeTogether"),
    (*b"TTG ", "Twardoch Typography"),
    (*b"TTY ", "Tipotype"),
    (*b"TYCU", "TypeCulture"),
    (*b"TYFR", "typographies.fr"),
    (*b"TYME", "type me! Font Foundry"),
    (*b"TYPA", "Typadelic"),
    (*b"TYPE", "Type Associates Pty Ltd"),
    (*b"TYPO", "Typodermic"),
    (*b"TYPR", "Type Project"),
    (*b"TYRE", "typerepublic"),
    (*b"UA  ", "UnAuthorized Type"),
    (*b"UNDT", "ÜNDT"),
    (*b"URW ", "URW++"),
    (*b"UT  ", "Unitype Inc"),
    (*b"VINT", "Vinterstille"),
    (*b"VKP ", "Vijay K. Patel"),
    (*b"VLKF", "Visualogik Technology & Design"),
    (*b"VLNL", "VetteLetters.nl"),
    (*b"VMT ", "VMType"),
    (*b"VOG ", "Martin Vogel"),
    (*b"VROM", "Vladimir Romanov"),
    (*b"VS  ", "VorSicht GmbH"),
    (*b"VT  ", "VISUALTYPE SRL"),
    (*b"VTF ", "Velvetyne Type Foundry"),
    (*b"WASP", "Wasp Barcode Technologies"),
    (*b"WILL", "Willerstorfer Font Foundry"),
    (*b"WL  ", "Writ Large Fonts"),
    (*b"WM  ", "Webmakers India"),
    (*b"XFC ", "Xerox Font Services"),
    (*b"XOTH", "Xoth Morello"),
    (*b"Y&Y ", "Y&Y, Inc."),
    (*b"YDS ", "Yellow Design Studio"),
    (*b"YN  ", "Yanone"),
    (*b"YOFF", "Your Own Font Foundry"),
    (*b"YOKO", "Yokokaku"),
    (*b"YOUR", "YourFonts.com"),
    (*b"ZANE", "Unrender"),
    (*b"ZeGr", "Zebra Font Factory"),
    (*b"zeta", "Tangram Studio"),
    (*b"ZSFT", "Zsoft"),
    (*b"ACG ", "Monotype Imaging"),
    (*b"B?  ", "Bigelow & Holmes"),
    (*b"FJ  ", "Fujitsu"),
    (*b"RICO", "Ricoh"),
];

/// Looks up the registered vendor for an OS/2 `achVendID`.
///
/// The field is not NUL terminated and short IDs show up padded with either
/// spaces or zero bytes, so trailing NULs are read as spaces before the
/// exact four-byte comparison.
pub fn from_vendor_id(id: [u8; 4]) -> Option<&'static str> {
    let normalized = normalize_id(id);
    VENDOR_IDS
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, name)| *name)
}

/// Finds the first foundry name mentioned in `notice`.
pub fn from_notice(notice: &str) -> Option<&'static str> {
    NOTICE_VENDORS
        .iter()
        .find(|(needle, _)| notice.contains(needle))
        .map(|(_, vendor)| *vendor)
}

/// True when `name` is exactly one of the registry's display names.
pub fn is_known_vendor(name: &str) -> bool {
    VENDOR_IDS.iter().any(|(_, vendor)| *vendor == name)
}

/// Accepts a free-text vendor candidate from the name table.
///
/// A known display name is kept as is; anything else must mention a
/// foundry from the notice table, otherwise the candidate is dropped.
pub fn resolve_candidate(candidate: &str) -> Option<String> {
    if is_known_vendor(candidate) {
        return Some(candidate.to_string());
    }
    from_notice(candidate).map(str::to_string)
}

fn normalize_id(mut id: [u8; 4]) -> [u8; 4] {
    for byte in id.iter_mut().rev() {
        if *byte != 0 {
            break;
        }
        *byte = b' ';
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_four_bytes_exactly() {
        assert_eq!(from_vendor_id(*b"ADBE"), Some("Adobe"));
        assert_eq!(from_vendor_id(*b"GOOG"), Some("Google"));
        assert_eq!(from_vendor_id(*b"adbe"), None);
    }

    #[test]
    fn short_ids_match_space_or_nul_padding() {
        assert_eq!(from_vendor_id(*b"MS  "), Some("Microsoft Corp."));
        assert_eq!(from_vendor_id(*b"MS\0\0"), Some("Microsoft Corp."));
        assert_eq!(from_vendor_id(*b"B&H "), Some("Bigelow & Holmes"));
        assert_eq!(from_vendor_id(*b"MS \0"), Some("Microsoft Corp."));
    }

    #[test]
    fn unknown_ids_are_none() {
        assert_eq!(from_vendor_id(*b"ZZZZ"), None);
        assert_eq!(from_vendor_id([0; 4]), None);
    }

    #[test]
    fn notice_lookup_is_ordered_substring() {
        assert_eq!(
            from_notice("Copyright (c) 1990 Adobe Systems, Bitstream Inc."),
            Some("Adobe")
        );
        assert_eq!(
            from_notice("Digitized data (c) Bigelow & Holmes Inc."),
            Some("Bigelow & Holmes")
        );
        assert_eq!(from_notice("made by hand"), None);
    }

    #[test]
    fn candidates_need_a_known_name_or_notice_hit() {
        assert_eq!(resolve_candidate("Google").as_deref(), Some("Google"));
        assert_eq!(
            resolve_candidate("Microsoft Typography Group").as_deref(),
            Some("Microsoft Corporation")
        );
        assert_eq!(resolve_candidate("Jane Doe Fonts"), None);
    }

    #[test]
    fn registry_ids_are_padded() {
        for (id, name) in VENDOR_IDS {
            assert!(!id.contains(&0), "{name} has a NUL in its id");
            assert!(!name.is_empty());
        }
    }
}

//! Embedded answer list
//!
//! A curated pool of common five-letter words compiled into the binary.
//! The daily-style target is drawn from here unless the player pins one.

/// Answer pool for target selection
pub const ANSWERS: &[&str] = &[
    "ABOUT", "ABOVE", "ACTOR", "ADOPT", "AGENT", "ALBUM", "ALERT", "ALIKE", "ALIVE", "ALLOW",
    "ALONE", "ANGEL", "ANGLE", "APPLE", "ARENA", "ARGUE", "ARISE", "AUDIO", "AVOID", "AWARE",
    "BADGE", "BAKER", "BASIC", "BEACH", "BEGIN", "BENCH", "BERRY", "BIRTH", "BLACK", "BLADE",
    "BLAME", "BLANK", "BLAST", "BLAZE", "BLEND", "BLOCK", "BOARD", "BRAIN", "BRAVE", "BREAD",
    "BREAK", "BRICK", "BRIDE", "BRIEF", "BRING", "BROAD", "BROWN", "BRUSH", "BUILD", "CABIN",
    "CABLE", "CANDY", "CARGO", "CARRY", "CATCH", "CAUSE", "CHAIN", "CHAIR", "CHALK", "CHARM",
    "CHART", "CHASE", "CHEAP", "CHECK", "CHESS", "CHEST", "CHIEF", "CHILD", "CHOIR", "CIVIC",
    "CLAIM", "CLEAN", "CLEAR", "CLIMB", "CLOCK", "CLOSE", "CLOUD", "COACH", "COAST", "COLOR",
    "CORAL", "COUNT", "COURT", "COVER", "CRAFT", "CRANE", "CRASH", "CREAM", "CRIME", "CROWD",
    "CROWN", "CURVE", "DAILY", "DANCE", "DEALT", "DELTA", "DEPTH", "DOUBT", "DOZEN", "DRAFT",
    "DRAIN", "DRAMA", "DREAM", "DRESS", "DRIFT", "DRINK", "DRIVE", "EAGER", "EARLY", "EARTH",
    "EIGHT", "ELECT", "EMPTY", "ENJOY", "ENTER", "EQUAL", "ERASE", "ERROR", "EVENT", "EXACT",
    "EXTRA", "FAITH", "FANCY", "FAULT", "FAVOR", "FEAST", "FIBER", "FIELD", "FIFTY", "FIGHT",
    "FINAL", "FIRST", "FLAME", "FLASH", "FLEET", "FLOOR", "FLOUR", "FOCUS", "FORCE", "FORGE",
    "FORTH", "FRAME", "FRESH", "FRONT", "FRUIT", "GIANT", "GLASS", "GLOBE", "GLORY", "GRACE",
    "GRADE", "GRAIN", "GRAND", "GRANT", "GRAPE", "GRASS", "GREAT", "GREEN", "GROUP", "GUARD",
    "GUESS", "GUEST", "GUIDE", "HAPPY", "HEART", "HEAVY", "HONEY", "HORSE", "HOTEL", "HOUSE",
    "HUMAN", "IDEAL", "IMAGE", "INDEX", "INPUT", "ISSUE", "JOINT", "JUDGE", "JUICE", "KNIFE",
    "KNOCK", "LABEL", "LARGE", "LASER", "LAUGH", "LAYER", "LEARN", "LEAST", "LEAVE", "LEGAL",
    "LEMON", "LEVEL", "LIGHT", "LIMIT", "LOCAL", "LOGIC", "LOOSE", "LUCKY", "LUNCH", "MAGIC",
    "MAJOR", "MAPLE", "MARCH", "MATCH", "MAYOR", "MEDAL", "MEDIA", "MERCY", "MERGE", "METAL",
    "METER", "MINOR", "MODEL", "MONEY", "MONTH", "MORAL", "MOTOR", "MOUNT", "MOUSE", "MOUTH",
    "MOVIE", "MUSIC", "NERVE", "NEVER", "NIGHT", "NOBLE", "NOISE", "NORTH", "NOVEL", "NURSE",
    "OCEAN", "OFFER", "OFTEN", "OLIVE", "ONION", "ORBIT", "ORDER", "ORGAN", "OTHER", "OUNCE",
    "PAINT", "PANEL", "PAPER", "PARTY", "PEACE", "PEARL", "PHONE", "PHOTO", "PIANO", "PIECE",
    "PILOT", "PITCH", "PLACE", "PLAIN", "PLANE", "PLANT", "PLATE", "POINT", "POUND", "POWER",
    "PRESS", "PRICE", "PRIDE", "PRIME", "PRINT", "PRIZE", "PROOF", "PROUD", "PROVE", "QUEEN",
    "QUICK", "QUIET", "QUOTE", "RADIO", "RAISE", "RANGE", "RAPID", "RATIO", "REACH", "REACT",
    "READY", "REALM", "RIDGE", "RIGHT", "RIVAL", "RIVER", "ROAST", "ROBOT", "ROUGH", "ROUND",
    "ROUTE", "ROYAL", "RURAL", "SALAD", "SAUCE", "SCALE", "SCENE", "SCOPE", "SCORE", "SENSE",
    "SERVE", "SEVEN", "SHADE", "SHAKE", "SHALL", "SHAPE", "SHARE", "SHARP", "SHEEP", "SHEET",
    "SHELF", "SHELL", "SHIFT", "SHINE", "SHIRT", "SHOCK", "SHORE", "SHORT", "SIGHT", "SKILL",
    "SLATE", "SLEEP", "SLICE", "SMALL", "SMART", "SMILE", "SMOKE", "SNAKE", "SOLAR", "SOLID",
    "SOUND", "SOUTH", "SPACE", "SPARE", "SPARK", "SPEAK", "SPEED", "SPEND", "SPICE", "SPLIT",
    "SPORT", "STAGE", "STAIR", "STAND", "START", "STATE", "STEAM", "STEEL", "STICK", "STILL",
    "STONE", "STORE", "STORM", "STORY", "STOVE", "STRAW", "STUDY", "STYLE", "SUGAR", "SWEET",
    "SWORD", "TABLE", "TASTE", "TEACH", "TENOR", "THEME", "THICK", "THING", "THINK", "THIRD",
    "THREE", "THROW", "TIGER", "TIGHT", "TITLE", "TODAY", "TOKEN", "TOPIC", "TOTAL", "TOUCH",
    "TOUGH", "TOWER", "TRACE", "TRACK", "TRADE", "TRAIL", "TRAIN", "TREAT", "TREND", "TRIAL",
    "TRICK", "TRUCK", "TRUST", "TRUTH", "TWICE", "UNCLE", "UNION", "UNITY", "UPPER", "URBAN",
    "USAGE", "VALUE", "VIDEO", "VIRUS", "VISIT", "VITAL", "VOICE", "WAGON", "WASTE", "WATCH",
    "WATER", "WHEAT", "WHEEL", "WHILE", "WHITE", "WHOLE", "WIDTH", "WOMAN", "WORDS", "WORLD",
    "WORTH", "WOUND", "WRIST", "WRITE", "WRONG", "YIELD", "YOUNG", "YOUTH",
];

/// Number of embedded answer words
pub const ANSWERS_COUNT: usize = ANSWERS.len();

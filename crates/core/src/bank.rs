//! Static word bank, one table per language.
//!
//! No file I/O: the word lists are compiled in. Each category holds 25 words
//! and the two languages mirror each other entry for entry.

use charades_types::{Category, Language};

/// Words for one category in one language.
pub fn words(language: Language, category: Category) -> &'static [&'static str] {
    match language {
        Language::En => words_en(category),
        Language::De => words_de(category),
    }
}

fn words_en(category: Category) -> &'static [&'static str] {
    match category {
        Category::Classic => &[
            "air guitar", "banana peel", "campfire", "snowball fight", "birthday party",
            "brain freeze", "elevator", "juggling", "pirate", "ghost",
            "zombie walk", "hula hoop", "ice skating", "spaghetti slurp", "walking on stilts",
            "clown", "cowboy", "dinosaur", "fireworks", "tickle monster",
            "pillow fight", "paper airplane", "kite flying", "opening a gift", "high five",
        ],
        Category::Cringe => &[
            "reply-all disaster", "mic unmuted", "camera on in pajamas", "autocorrect fail",
            "awkward high five",
            "influencer apology", "buffering video", "typing then disappearing",
            "accidental pocket call", "wrong group chat",
            "saying you too", "double text", "forgetting someones name", "bad pun", "dad dance",
            "laughing at your own joke", "spilling coffee", "voice crack", "wave at wrong person",
            "holding the door too long",
            "trip on nothing", "zoom filter glitch", "posting then deleting",
            "reading a message out loud", "bad handshake",
        ],
        Category::Animals => &[
            "penguin", "giraffe", "octopus", "sloth", "hamster",
            "goldfish", "panda", "kangaroo", "flamingo", "turtle",
            "dolphin", "owl", "butterfly", "crocodile", "zebra",
            "elephant", "monkey", "cat", "dog", "bee",
            "snake", "frog", "seal", "peacock", "hedgehog",
        ],
        Category::MoviesTv => &[
            "superhero landing", "plot twist", "space adventure", "pirate ship",
            "detective mystery",
            "wizard school", "robot sidekick", "time travel", "alien invasion", "game show host",
            "cooking competition", "dance finale", "car chase", "romantic comedy",
            "animated musical",
            "news anchor", "sports commentator", "secret agent", "supervillain laugh",
            "dramatic courtroom",
            "monster under the bed", "cliffhanger ending", "laugh track", "mystery box",
            "training montage",
        ],
        Category::Professions => &[
            "firefighter", "teacher", "nurse", "chef", "pilot",
            "astronaut", "mail carrier", "photographer", "mechanic", "scientist",
            "artist", "dentist", "lifeguard", "barber", "architect",
            "software developer", "gardener", "police officer", "bus driver", "farmer",
            "veterinarian", "news reporter", "carpenter", "zookeeper", "coach",
        ],
        Category::EverydayObjects => &[
            "umbrella", "shopping cart", "toothbrush", "coffee mug", "remote control",
            "sunglasses", "backpack", "alarm clock", "rubber duck", "teddy bear",
            "flashlight", "water bottle", "key ring", "sticky note", "blanket",
            "pillow", "lunch box", "soccer ball", "paintbrush", "hairbrush",
            "tape dispenser", "doorbell", "vacuum cleaner", "headphones", "wallet",
        ],
        Category::Actions => &[
            "brushing your teeth", "washing dishes", "doing the moonwalk", "jumping rope",
            "blowing bubbles",
            "building a sandcastle", "sneaking quietly", "tiptoeing", "opening a stuck jar",
            "baking cookies",
            "catching a bus", "reading a map", "tying shoelaces", "taking a selfie",
            "rowing a boat",
            "climbing a ladder", "playing the violin", "dribbling a basketball", "walking a dog",
            "painting a wall",
            "balancing on one foot", "pretending to be a robot", "inflating a balloon",
            "stirring soup", "shivering from cold",
        ],
    }
}

fn words_de(category: Category) -> &'static [&'static str] {
    match category {
        Category::Classic => &[
            "luftgitarre", "bananenschale", "lagerfeuer", "schneeballschlacht", "geburtstagsparty",
            "gehirnfrost", "aufzug", "jonglieren", "pirat", "geist",
            "zombiegang", "hula-hoop", "eislaufen", "spaghetti schlürfen", "auf stelzen laufen",
            "clown", "cowboy", "dinosaurier", "feuerwerk", "kitzelmonster",
            "kissenschlacht", "papierflugzeug", "drachen steigen lassen", "geschenk auspacken",
            "high five",
        ],
        Category::Cringe => &[
            "antwort-an-alle-katastrophe", "mikro nicht stumm", "kamera an im pyjama",
            "autokorrektur-fail", "peinlicher high five",
            "influencer-entschuldigung", "video puffert", "tippen und dann verschwinden",
            "versehentlicher taschenanruf", "falscher gruppenchat",
            "dir auch sagen", "doppelt schreiben", "jemandes namen vergessen",
            "schlechter wortwitz", "papa-tanz",
            "über den eigenen witz lachen", "kaffee verschütten", "stimmenbruch",
            "bei falscher person winken", "tür zu lange aufhalten",
            "über nichts stolpern", "zoom-filter-fehler", "posten und löschen",
            "nachricht laut vorlesen", "schlechter händedruck",
        ],
        Category::Animals => &[
            "pinguin", "giraffe", "oktopus", "faultier", "hamster",
            "goldfisch", "panda", "känguru", "flamingo", "schildkröte",
            "delfin", "eule", "schmetterling", "krokodil", "zebra",
            "elefant", "affe", "katze", "hund", "biene",
            "schlange", "frosch", "robbe", "pfau", "igel",
        ],
        Category::MoviesTv => &[
            "superhelden-landung", "plot twist", "weltraumabenteuer", "piratenschiff",
            "detektivfall",
            "zauberschule", "roboter-sidekick", "zeitreise", "alieninvasion", "gameshow-moderator",
            "kochshow-wettbewerb", "tanzfinale", "autoverfolgungsjagd", "romantische komödie",
            "animiertes musical",
            "nachrichtensprecher", "sportkommentator", "geheimagent", "superschurkenlachen",
            "dramatischer gerichtssaal",
            "monster unterm bett", "cliffhanger-ende", "lachspur", "mystery-box",
            "trainingsmontage",
        ],
        Category::Professions => &[
            "feuerwehrmann", "lehrer", "pfleger", "koch", "pilot",
            "astronaut", "postbote", "fotograf", "mechaniker", "wissenschaftler",
            "künstler", "zahnarzt", "bademeister", "friseur", "architekt",
            "softwareentwickler", "gärtner", "polizist", "busfahrer", "bauer",
            "tierarzt", "reporter", "tischler", "zoo-wärter", "trainer",
        ],
        Category::EverydayObjects => &[
            "regenschirm", "einkaufswagen", "zahnbürste", "kaffeebecher", "fernbedienung",
            "sonnenbrille", "rucksack", "wecker", "gummiente", "teddybär",
            "taschenlampe", "wasserflasche", "schlüsselbund", "haftnotiz", "decke",
            "kissen", "brotbox", "fußball", "pinsel", "haarbürste",
            "klebebandabroller", "türklingel", "staubsauger", "kopfhörer", "geldbeutel",
        ],
        Category::Actions => &[
            "zähne putzen", "geschirr spülen", "den moonwalk machen", "seilspringen",
            "seifenblasen pusten",
            "sandburg bauen", "leise schleichen", "auf zehenspitzen gehen",
            "ein festsitzendes glas öffnen", "kekse backen",
            "einen bus erwischen", "eine karte lesen", "schnürsenkel binden", "ein selfie machen",
            "ein boot rudern",
            "eine leiter hochklettern", "geige spielen", "basketball dribbeln",
            "einen hund ausführen", "eine wand streichen",
            "auf einem bein balancieren", "so tun, als wärst du ein roboter",
            "einen ballon aufblasen", "suppe umrühren", "vor kälte zittern",
        ],
    }
}

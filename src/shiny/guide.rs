use super::ShinyMethod;

/// One topic of the shiny hunting guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    pub title: &'static str,
    pub body: &'static str,
    /// Methods this section explains. Empty for general topics.
    pub methods: &'static [ShinyMethod],
}

impl GuideSection {
    const fn new(
        title: &'static str,
        body: &'static str,
        methods: &'static [ShinyMethod],
    ) -> Self {
        Self { title, body, methods }
    }
}

/// The guide, in reading order. Every method appears in exactly one section.
pub const GUIDE: [GuideSection; 15] = [
    GuideSection::new(
        "Origins",
        "Shiny Pokémon arrived in Gold, Silver and Crystal: recoloured variants that \
         sparkle on entering battle. The red Gyarados at the Lake of Rage was most \
         players' first.",
        &[],
    ),
    GuideSection::new(
        "Base odds",
        "1/8192 from Gen II through Gen V, when shininess was decided by DVs and later \
         by the personality value. 1/4096 from X and Y onward.",
        &[],
    ),
    GuideSection::new(
        "Shiny Charm",
        "A key item for completing the Pokédex. It adds rolls to almost every method \
         from Black 2 and White 2 on. Each roll is another chance at the base odds.",
        &[],
    ),
    GuideSection::new(
        "Random and static encounters",
        "Every encounter is one roll. Some legendaries and gift Pokémon are shiny \
         locked and can never be shiny.",
        &[ShinyMethod::Random, ShinyMethod::Static],
    ),
    GuideSection::new(
        "Eggs",
        "Plain breeding uses the base odds. The Masuda Method pairs parents from \
         different language games for extra rolls. Crystal's Odd Egg and Gen II \
         breeding with a shiny parent have their own fixed odds.",
        &[ShinyMethod::Breeding, ShinyMethod::Masuda, ShinyMethod::OddEgg],
    ),
    GuideSection::new(
        "Poké Radar",
        "Chain the same species through shaking grass in Gen IV, X and Y, or BDSP. \
         The odds climb with the chain and top out at 1/200 from a chain of 40.",
        &[ShinyMethod::PokeRadarGen4, ShinyMethod::PokeRadarGen6],
    ),
    GuideSection::new(
        "Chain fishing",
        "Reel in Pokémon back to back in Gen VI. Each hook adds two rolls, up to a \
         chain of 20.",
        &[ShinyMethod::ChainFishing],
    ),
    GuideSection::new(
        "Friend Safari",
        "The X and Y Friend Safari starts with extra rolls for every encounter.",
        &[ShinyMethod::FriendSafari],
    ),
    GuideSection::new(
        "SOS battles",
        "Wild Pokémon in Alola call for help. Long call chains add rolls at 11, 21 \
         and 31 calls.",
        &[ShinyMethod::Sos],
    ),
    GuideSection::new(
        "Catch combo",
        "Catching the same species in a row in Let's Go boosts every overworld spawn. \
         A lure adds one more roll.",
        &[ShinyMethod::CatchCombo],
    ),
    GuideSection::new(
        "Galar",
        "Cooking curry at camp can attract a wild Pokémon. Dynamax Adventures have \
         their own fixed odds, which the Shiny Charm improves.",
        &[ShinyMethod::CurrySpawn, ShinyMethod::DynamaxAdventure],
    ),
    GuideSection::new(
        "Grand Underground",
        "In BDSP, digging with Diglett bonus active doubles the rolls for Hideaway \
         encounters.",
        &[ShinyMethod::DiglettBonus],
    ),
    GuideSection::new(
        "Mass outbreaks",
        "Legends: Arceus outbreaks and massive mass outbreaks add rolls. In Scarlet \
         and Violet, defeating 30 and then 60 outbreak Pokémon adds rolls for that \
         outbreak. Sparkling Power from Herba Mystica sandwiches stacks on top.",
        &[ShinyMethod::PlaOutbreak, ShinyMethod::SvOutbreak],
    ),
    GuideSection::new(
        "Hyperspace",
        "In Legends: Z-A, Ansha's donuts give Sparkling Power inside Hoopa's rings. \
         Each level adds a roll.",
        &[ShinyMethod::Hyperspace, ShinyMethod::HyperspaceStatic],
    ),
    GuideSection::new(
        "Fixed odds",
        "Tera Raids and restored fossils ignore every bonus.",
        &[ShinyMethod::TeraRaid, ShinyMethod::FossilRestore],
    ),
];

/// The section that explains `method`.
pub fn guide_section(method: ShinyMethod) -> Option<&'static GuideSection> {
    GUIDE.iter().find(|section| section.methods.contains(&method))
}

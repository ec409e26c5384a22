pub const GALAXY_SIZE: usize = 8;
pub const SECTOR_SIZE: usize = 8;
pub const MAX_KLINGONS_PER_QUADRANT: i32 = 3;

pub const NUM_KLINGONS: usize = 26;
pub const NUM_STARBASES: usize = 3;
pub const NUM_STARS: usize = 262;

pub const INITIAL_ENERGY: i32 = 3000;
pub const INITIAL_TORPEDOES: i32 = 10;
pub const INITIAL_SHIELDS: i32 = 0;
pub const STARBASE_ENERGY: i32 = 3000;
pub const KLINGON_MIN_ENERGY: u32 = 100;
pub const KLINGON_MAX_ENERGY: u32 = 300;

pub const START_STARDATE: i32 = 2700;
pub const MISSION_DAYS: i32 = 26;

pub const MAX_WARP: f64 = 8.0;
pub const DAMAGED_MAX_WARP: f64 = 0.2;
pub const TORPEDO_ENERGY_COST: i32 = 2;
pub const TORPEDO_RANGE: usize = 9;
pub const LOW_SHIELD_WARNING: i32 = 200;

pub const NUM_DEVICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    WarpEngines = 0,
    ShortRangeSensors = 1,
    LongRangeSensors = 2,
    PhaserControl = 3,
    PhotonTubes = 4,
    DamageControl = 5,
    ShieldControl = 6,
    LibraryComputer = 7,
}

impl Device {
    pub fn name(&self) -> &'static str {
        match self {
            Device::WarpEngines => "WARP ENGINES",
            Device::ShortRangeSensors => "SHORT RANGE SENSORS",
            Device::LongRangeSensors => "LONG RANGE SENSORS",
            Device::PhaserControl => "PHASER CONTROL",
            Device::PhotonTubes => "PHOTON TUBES",
            Device::DamageControl => "DAMAGE CONTROL",
            Device::ShieldControl => "SHIELD CONTROL",
            Device::LibraryComputer => "LIBRARY-COMPUTER",
        }
    }

    /// Report printed when a command is refused because this device is out.
    pub fn inoperable_message(&self) -> &'static str {
        match self {
            Device::WarpEngines => "WARP ENGINES ARE DAMAGED",
            Device::ShortRangeSensors => "*** SHORT RANGE SENSORS ARE OUT ***",
            Device::LongRangeSensors => "LONG RANGE SENSORS ARE INOPERABLE",
            Device::PhaserControl => "PHASERS INOPERATIVE",
            Device::PhotonTubes => "PHOTON TUBES ARE NOT OPERATIONAL",
            Device::DamageControl => "DAMAGE CONTROL REPORT NOT AVAILABLE",
            Device::ShieldControl => "SHIELD CONTROL INOPERABLE",
            Device::LibraryComputer => "COMPUTER DISABLED",
        }
    }

    pub const ALL: [Device; NUM_DEVICES] = [
        Device::WarpEngines,
        Device::ShortRangeSensors,
        Device::LongRangeSensors,
        Device::PhaserControl,
        Device::PhotonTubes,
        Device::DamageControl,
        Device::ShieldControl,
        Device::LibraryComputer,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorContent {
    Empty,
    Star,
    Klingon,
    Starbase,
    Player,
}

impl SectorContent {
    pub fn symbol(&self) -> &'static str {
        match self {
            SectorContent::Empty => "   ",
            SectorContent::Star => " * ",
            SectorContent::Klingon => "+K+",
            SectorContent::Starbase => ">!<",
            SectorContent::Player => "<*>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Green,
    Yellow,
    Red,
    Docked,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Green => "GREEN",
            Condition::Yellow => "*YELLOW*",
            Condition::Red => "*RED*",
            Condition::Docked => "DOCKED",
        }
    }
}

/// Why a mission ended without victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatReason {
    ShipDestroyed,
    StarbasesDestroyed,
    TimeExpired,
    Resigned,
}

/// Course step vectors for dial positions 1-9. Index 0 is unused.
/// Format: (delta_row, delta_col). Rows grow downward.
pub const COURSE_VECTORS: [(f64, f64); 10] = [
    (0.0, 0.0),   // index 0: unused
    (0.0, 1.0),   // course 1
    (-1.0, 1.0),  // course 2
    (-1.0, 0.0),  // course 3
    (-1.0, -1.0), // course 4
    (0.0, -1.0),  // course 5
    (1.0, -1.0),  // course 6
    (1.0, 0.0),   // course 7
    (1.0, 1.0),   // course 8
    (0.0, 1.0),   // course 9 (closes the dial for 8.x interpolation)
];

use crate::balls::{Ball, BallContext};
use crate::capture::{
    compute_capture, CaptureExtras, CaptureParameters, CaptureResult, StatusCondition,
};
use crate::generation::Generation;

use super::state::EntryError;

/// Inputs of the capture calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureForm {
    pub generation: Generation,
    pub ball: Ball,
    pub base_rate: u16,
    pub hp_percent: u8,
    pub status: StatusCondition,
    pub wild_level: u8,
    pub user_level: u8,
    pub turns: u16,
    pub dark_or_cave: bool,
    pub water_or_bug: bool,
    pub already_caught: bool,
    pub dex_count: u16,
    pub grass: bool,
    pub power: u8,
    pub difficulty: bool,
    pub trainer_level: u8,
    pub catch_charm: bool,
    pub unaware: bool,
    pub badges: u8,
}

impl Default for CaptureForm {
    fn default() -> Self {
        let extras = CaptureExtras::default();
        Self {
            generation: Generation::Gen9,
            ball: Ball::PokeBall,
            base_rate: 45,
            hp_percent: 100,
            status: StatusCondition::Healthy,
            wild_level: extras.wild_level,
            user_level: 50,
            turns: 0,
            dark_or_cave: false,
            water_or_bug: false,
            already_caught: false,
            dex_count: extras.dex_count,
            grass: extras.grass,
            power: extras.power,
            difficulty: extras.difficulty,
            trainer_level: extras.trainer_level,
            catch_charm: extras.catch_charm,
            unaware: extras.unaware,
            badges: extras.badge_count,
        }
    }
}

impl CaptureForm {
    const MAX_HP: f64 = 100.0;

    pub fn ball_context(&self) -> BallContext {
        BallContext {
            turns_elapsed: self.turns,
            wild_level: self.wild_level,
            user_level: self.user_level,
            dark_or_cave: self.dark_or_cave,
            water_or_bug: self.water_or_bug,
            already_caught: self.already_caught,
            target_asleep: self.status == StatusCondition::Sleep,
            ..BallContext::default()
        }
    }

    pub fn extras(&self) -> CaptureExtras {
        CaptureExtras {
            grass: self.grass,
            dex_count: self.dex_count,
            power: self.power,
            difficulty: self.difficulty,
            trainer_level: self.trainer_level,
            wild_level: self.wild_level,
            catch_charm: self.catch_charm,
            unaware: self.unaware,
            badge_count: self.badges,
        }
    }

    /// Parameters with the ball's effect folded in.
    pub fn parameters(&self) -> CaptureParameters {
        let hp = f64::from(self.hp_percent.max(1));
        let params = CaptureParameters::new(self.base_rate, hp, Self::MAX_HP)
            .with_status(self.status)
            .with_extras(self.extras());
        self.ball.effect(self.generation, &self.ball_context()).apply_to(params)
    }

    pub fn result(&self) -> CaptureResult {
        compute_capture(self.generation, &self.parameters())
    }

    /// Switch generation, falling back to a Poké Ball when the current ball
    /// does not exist there.
    pub fn set_generation(&mut self, generation: Generation) {
        self.generation = generation;
        if !self.ball.available_in(generation) {
            self.ball = Ball::PokeBall;
        }
    }

    fn cycle_ball(&mut self, forward: bool) {
        let balls = Ball::available(self.generation);
        if balls.is_empty() {
            return;
        }
        let i = balls.iter().position(|&b| b == self.ball).unwrap_or(0);
        let n = balls.len();
        self.ball = balls[if forward { (i + 1) % n } else { (i + n - 1) % n }];
    }
}

/// Editable rows of the capture scene, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureField {
    Generation,
    Ball,
    BaseRate,
    HpPercent,
    Status,
    WildLevel,
    UserLevel,
    Turns,
    DarkOrCave,
    WaterOrBug,
    AlreadyCaught,
    DexCount,
    Grass,
    Power,
    Difficulty,
    TrainerLevel,
    CatchCharm,
    Unaware,
    Badges,
}

pub(crate) const CAPTURE_FIELDS: [CaptureField; 19] = [
    CaptureField::Generation,
    CaptureField::Ball,
    CaptureField::BaseRate,
    CaptureField::HpPercent,
    CaptureField::Status,
    CaptureField::WildLevel,
    CaptureField::UserLevel,
    CaptureField::Turns,
    CaptureField::DarkOrCave,
    CaptureField::WaterOrBug,
    CaptureField::AlreadyCaught,
    CaptureField::DexCount,
    CaptureField::Grass,
    CaptureField::Power,
    CaptureField::Difficulty,
    CaptureField::TrainerLevel,
    CaptureField::CatchCharm,
    CaptureField::Unaware,
    CaptureField::Badges,
];

fn yes_no(v: bool) -> &'static str {
    if v {
        "Yes"
    } else {
        "No"
    }
}

fn step_u8(v: u8, delta: i32, min: u8, max: u8) -> u8 {
    (i32::from(v) + delta).clamp(i32::from(min), i32::from(max)) as u8
}

fn step_u16(v: u16, delta: i32, min: u16, max: u16) -> u16 {
    (i32::from(v) + delta).clamp(i32::from(min), i32::from(max)) as u16
}

fn cycle_status(status: StatusCondition, forward: bool) -> StatusCondition {
    let all = StatusCondition::ALL;
    let i = all.iter().position(|&s| s == status).unwrap_or(0);
    let n = all.len();
    all[if forward { (i + 1) % n } else { (i + n - 1) % n }]
}

fn parse_number(text: &str, min: u16, max: u16) -> Result<u16, EntryError> {
    let value: u16 =
        text.trim().parse().map_err(|_| EntryError::NotANumber(text.trim().to_string()))?;
    if value < min || value > max {
        return Err(EntryError::OutOfRange { value, min, max });
    }
    Ok(value)
}

impl CaptureField {
    pub fn label(self) -> &'static str {
        match self {
            CaptureField::Generation => "Generation",
            CaptureField::Ball => "Ball",
            CaptureField::BaseRate => "Base Catch Rate",
            CaptureField::HpPercent => "HP Remaining %",
            CaptureField::Status => "Status",
            CaptureField::WildLevel => "Wild Level",
            CaptureField::UserLevel => "Your Level",
            CaptureField::Turns => "Turns Passed",
            CaptureField::DarkOrCave => "Night / Cave",
            CaptureField::WaterOrBug => "Water / Bug Type",
            CaptureField::AlreadyCaught => "Already Caught",
            CaptureField::DexCount => "Pokédex Caught",
            CaptureField::Grass => "Dark Grass",
            CaptureField::Power => "Capture Power",
            CaptureField::Difficulty => "Outlevelled Penalty",
            CaptureField::TrainerLevel => "Trainer Level Cap",
            CaptureField::CatchCharm => "Catching Charm",
            CaptureField::Unaware => "Unaware Target",
            CaptureField::Badges => "Badges",
        }
    }

    pub fn value(self, form: &CaptureForm) -> String {
        match self {
            CaptureField::Generation => form.generation.to_string(),
            CaptureField::Ball => form.ball.to_string(),
            CaptureField::BaseRate => form.base_rate.to_string(),
            CaptureField::HpPercent => format!("{}%", form.hp_percent),
            CaptureField::Status => form.status.to_string(),
            CaptureField::WildLevel => form.wild_level.to_string(),
            CaptureField::UserLevel => form.user_level.to_string(),
            CaptureField::Turns => form.turns.to_string(),
            CaptureField::DarkOrCave => yes_no(form.dark_or_cave).to_string(),
            CaptureField::WaterOrBug => yes_no(form.water_or_bug).to_string(),
            CaptureField::AlreadyCaught => yes_no(form.already_caught).to_string(),
            CaptureField::DexCount => form.dex_count.to_string(),
            CaptureField::Grass => yes_no(form.grass).to_string(),
            CaptureField::Power => format!("Lv {}", form.power),
            CaptureField::Difficulty => yes_no(form.difficulty).to_string(),
            CaptureField::TrainerLevel => form.trainer_level.to_string(),
            CaptureField::CatchCharm => yes_no(form.catch_charm).to_string(),
            CaptureField::Unaware => yes_no(form.unaware).to_string(),
            CaptureField::Badges => form.badges.to_string(),
        }
    }

    pub fn display(self, form: &CaptureForm) -> String {
        format!("{}: {}", self.label(), self.value(form))
    }

    /// Whether the field changes anything under the current form.
    pub fn relevant(self, form: &CaptureForm) -> bool {
        let gen = form.generation;
        match self {
            CaptureField::Generation
            | CaptureField::Ball
            | CaptureField::BaseRate
            | CaptureField::HpPercent
            | CaptureField::Status => true,
            CaptureField::WildLevel => {
                gen >= Generation::Gen8 || matches!(form.ball, Ball::NestBall | Ball::LevelBall)
            }
            CaptureField::UserLevel => form.ball == Ball::LevelBall,
            CaptureField::Turns => matches!(form.ball, Ball::TimerBall | Ball::QuickBall),
            CaptureField::DarkOrCave => form.ball == Ball::DuskBall,
            CaptureField::WaterOrBug => form.ball == Ball::NetBall,
            CaptureField::AlreadyCaught => form.ball == Ball::RepeatBall,
            CaptureField::DexCount | CaptureField::Grass | CaptureField::Power => {
                gen >= Generation::Gen5
            }
            CaptureField::Difficulty | CaptureField::TrainerLevel | CaptureField::CatchCharm => {
                gen >= Generation::Gen8
            }
            CaptureField::Unaware | CaptureField::Badges => gen == Generation::Gen9,
        }
    }

    /// Whether Enter opens a text entry for this field.
    pub fn accepts_entry(self) -> bool {
        !matches!(
            self,
            CaptureField::DarkOrCave
                | CaptureField::WaterOrBug
                | CaptureField::AlreadyCaught
                | CaptureField::Grass
                | CaptureField::Difficulty
                | CaptureField::CatchCharm
                | CaptureField::Unaware
        )
    }

    pub fn adjust(self, form: &mut CaptureForm, forward: bool) {
        let d = if forward { 1 } else { -1 };
        match self {
            CaptureField::Generation => {
                let next = if forward { form.generation.next() } else { form.generation.prev() };
                form.set_generation(next);
            }
            CaptureField::Ball => form.cycle_ball(forward),
            CaptureField::BaseRate => form.base_rate = step_u16(form.base_rate, 5 * d, 1, 255),
            CaptureField::HpPercent => form.hp_percent = step_u8(form.hp_percent, 5 * d, 1, 100),
            CaptureField::Status => form.status = cycle_status(form.status, forward),
            CaptureField::WildLevel => form.wild_level = step_u8(form.wild_level, d, 1, 100),
            CaptureField::UserLevel => form.user_level = step_u8(form.user_level, d, 1, 100),
            CaptureField::Turns => form.turns = step_u16(form.turns, d, 0, 99),
            CaptureField::DarkOrCave => form.dark_or_cave = !form.dark_or_cave,
            CaptureField::WaterOrBug => form.water_or_bug = !form.water_or_bug,
            CaptureField::AlreadyCaught => form.already_caught = !form.already_caught,
            CaptureField::DexCount => form.dex_count = step_u16(form.dex_count, 25 * d, 0, 1025),
            CaptureField::Grass => form.grass = !form.grass,
            CaptureField::Power => form.power = step_u8(form.power, d, 0, 3),
            CaptureField::Difficulty => form.difficulty = !form.difficulty,
            CaptureField::TrainerLevel => {
                form.trainer_level = step_u8(form.trainer_level, d, 1, 100)
            }
            CaptureField::CatchCharm => form.catch_charm = !form.catch_charm,
            CaptureField::Unaware => form.unaware = !form.unaware,
            CaptureField::Badges => form.badges = step_u8(form.badges, d, 0, 8),
        }
    }

    /// Set the field from typed text.
    pub fn apply_entry(self, form: &mut CaptureForm, text: &str) -> Result<(), EntryError> {
        match self {
            CaptureField::Generation => form.set_generation(text.parse()?),
            CaptureField::Ball => {
                let ball: Ball = text.parse()?;
                if !ball.available_in(form.generation) {
                    return Err(EntryError::Unavailable {
                        item: ball.to_string(),
                        generation: form.generation,
                    });
                }
                form.ball = ball;
            }
            CaptureField::Status => form.status = text.parse()?,
            CaptureField::BaseRate => form.base_rate = parse_number(text, 1, 255)?,
            CaptureField::HpPercent => form.hp_percent = parse_number(text, 1, 100)? as u8,
            CaptureField::WildLevel => form.wild_level = parse_number(text, 1, 100)? as u8,
            CaptureField::UserLevel => form.user_level = parse_number(text, 1, 100)? as u8,
            CaptureField::Turns => form.turns = parse_number(text, 0, 99)?,
            CaptureField::DexCount => form.dex_count = parse_number(text, 0, 1025)?,
            CaptureField::Power => form.power = parse_number(text, 0, 3)? as u8,
            CaptureField::TrainerLevel => form.trainer_level = parse_number(text, 1, 100)? as u8,
            CaptureField::Badges => form.badges = parse_number(text, 0, 8)? as u8,
            CaptureField::DarkOrCave
            | CaptureField::WaterOrBug
            | CaptureField::AlreadyCaught
            | CaptureField::Grass
            | CaptureField::Difficulty
            | CaptureField::CatchCharm
            | CaptureField::Unaware => self.adjust(form, true),
        }
        Ok(())
    }
}

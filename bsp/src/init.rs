//! Board initialization sequencer.
//!
//! Brings the board from reset to a known-good hardware state in five
//! stages. Each stage depends on what the previous ones established, so they
//! run strictly in order and the first failure stops the sequence:
//!
//! 1. [`Stage::PowerManagement`]: resource registry and power-management bring-up
//! 2. [`Stage::SupplyVoltage`]: analog supply parameters (skipped without a regulator)
//! 3. [`Stage::Configuration`]: clock tree and peripherals, then pins
//! 4. [`Stage::CallbackRegistration`]: clock-system deep-sleep hook and extras
//! 5. [`Stage::ResourceReservation`]: blocks the board keeps for itself
//!
//! Completed stages are not rolled back when a later one fails. The caller
//! decides whether a failed bring-up halts boot.

use core::fmt;

use hal::clock::SystemConfig;
use hal::gpio::PinConfig;
use hal::hwmgr::{HwmgrError, ResourceLayout, ResourceRegistry};
use hal::resource::ResourceDescriptor;
use hal::supply::Supply;
use hal::syspm::{CallbackEntry, DEFAULT_CALLBACK_SLOTS, PmError, SysPm, TransitionMask};
use hal::{ConfigError, Platform};
use log::{debug, error, info, warn};

use crate::boards::current as board;

/// Order of the clock system's deep-sleep callback.
///
/// The highest order there is: the clock callback runs last on the way into
/// deep sleep and first on the way out, which keeps the window with unstable
/// clocks as short as possible. No other deep-sleep callback may use it.
pub const SYSCLK_PM_CALLBACK_ORDER: u8 = u8::MAX;

/// Init stages, in execution order.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    PowerManagement = 1,
    SupplyVoltage = 2,
    Configuration = 3,
    CallbackRegistration = 4,
    ResourceReservation = 5,
}

impl Stage {
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Stage::PowerManagement => "power management",
            Stage::SupplyVoltage => "supply voltage",
            Stage::Configuration => "configuration",
            Stage::CallbackRegistration => "callback registration",
            Stage::ResourceReservation => "resource reservation",
        }
    }

    /// Tags a cause with this stage.
    fn fail<C: Into<Cause>>(self) -> impl FnOnce(C) -> BoardInitError {
        move |cause| BoardInitError::new(self, cause)
    }
}

/// Where the sequencer stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardState {
    Uninitialized,
    Ready,
    Failed(Stage),
}

/// What to do when a board-reserved block is already claimed.
///
/// A conflict usually means the application reserved the same block in its
/// own configuration. Whether that is fatal is the integrator's call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Abort init at the first conflicting reservation.
    #[default]
    Fail,
    /// Log the conflict and keep reserving the rest.
    WarnAndContinue,
}

/// Inputs of the sequencer. All static data.
#[derive(Debug, Copy, Clone)]
pub struct BoardConfig {
    /// Analog supply voltage to configure, if any.
    pub vdda_mv: Option<u16>,
    pub system: &'static SystemConfig,
    pub pins: &'static [PinConfig],
    /// Board-reserved blocks, claimed in declaration order.
    pub reserved: &'static [ResourceDescriptor],
    /// Extra power callbacks registered after the clock system's.
    pub callbacks: &'static [CallbackEntry],
    /// Hold a deep-sleep lock from init on.
    pub lock_deep_sleep: bool,
    pub conflict_policy: ConflictPolicy,
}

impl BoardConfig {
    /// Tables of the board selected at build time.
    pub const fn current() -> Self {
        Self {
            vdda_mv: board::VDDA_MV,
            system: &board::SYSTEM_CONFIG,
            pins: board::PINS,
            reserved: board::RESERVED,
            callbacks: &[],
            lock_deep_sleep: !cfg!(feature = "deep-sleep-idle"),
            conflict_policy: ConflictPolicy::Fail,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::current()
    }
}

/// Process-wide hardware state created by board bring-up.
///
/// Drivers receive the registry and power manager by reference
/// ([`Board::registry`], [`Board::syspm`]) instead of looking them up.
pub struct Board<const CALLBACKS: usize = DEFAULT_CALLBACK_SLOTS> {
    registry: ResourceRegistry,
    syspm: SysPm<CALLBACKS>,
    state: BoardState,
}

pub type BoardInitResult = Result<(), BoardInitError>;

impl<const CALLBACKS: usize> Board<CALLBACKS> {
    pub const fn new(layout: &'static ResourceLayout) -> Self {
        Self {
            registry: ResourceRegistry::new(layout),
            syspm: SysPm::new(),
            state: BoardState::Uninitialized,
        }
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn syspm(&self) -> &SysPm<CALLBACKS> {
        &self.syspm
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    /// Run all five stages against `platform`.
    ///
    /// Returns the first failure, tagged with its stage. The board is left in
    /// [`BoardState::Ready`] or [`BoardState::Failed`].
    pub fn init<P: Platform + ?Sized>(
        &mut self,
        platform: &mut P,
        config: &BoardConfig,
    ) -> BoardInitResult {
        info!("board: {} init on {}", board::NAME, platform.name());
        let result = self.run_stages(platform, config);
        match result {
            Ok(()) => {
                self.state = BoardState::Ready;
                info!("board: ready");
            }
            Err(e) => {
                self.state = BoardState::Failed(e.stage);
                error!("board: {}", e);
            }
        }
        result
    }

    fn run_stages<P: Platform + ?Sized>(
        &self,
        platform: &mut P,
        config: &BoardConfig,
    ) -> BoardInitResult {
        self.bring_up(platform)
            .map_err(Stage::PowerManagement.fail())?;
        self.configure_supply(platform, config)
            .map_err(Stage::SupplyVoltage.fail())?;
        Self::apply_configuration(platform, config)
            .map_err(Stage::Configuration.fail())?;
        self.register_callbacks(platform, config)
            .map_err(Stage::CallbackRegistration.fail())?;
        self.reserve_board_resources(config)
    }

    fn bring_up<P: Platform + ?Sized>(&self, platform: &mut P) -> Result<(), Cause> {
        self.registry.init()?;
        platform.init_power_management()?;
        Ok(())
    }

    fn configure_supply<P: Platform + ?Sized>(
        &self,
        platform: &mut P,
        config: &BoardConfig,
    ) -> Result<(), ConfigError> {
        let Some(mv) = config.vdda_mv else {
            debug!("board: no VDDA setting, supply stage skipped");
            return Ok(());
        };
        let Some(supply) = platform.supply() else {
            debug!("board: no supply control, supply stage skipped");
            return Ok(());
        };
        supply.set_supply_voltage(Supply::Vdda, mv)?;
        self.syspm.record_supply_voltage(Supply::Vdda, mv);
        debug!("board: VDDA = {} mV", mv);
        Ok(())
    }

    fn apply_configuration<P: Platform + ?Sized>(
        platform: &mut P,
        config: &BoardConfig,
    ) -> Result<(), ConfigError> {
        platform.apply_clock_and_peripheral_config(config.system)?;
        platform.apply_pin_config(config.pins)?;
        debug!("board: applied {} pin configurations", config.pins.len());
        Ok(())
    }

    fn register_callbacks<P: Platform + ?Sized>(
        &self,
        platform: &mut P,
        config: &BoardConfig,
    ) -> Result<(), PmError> {
        self.syspm.register_callback(CallbackEntry::new(
            SYSCLK_PM_CALLBACK_ORDER,
            TransitionMask::DEEP_SLEEP,
            platform.sysclk_pm_handler(),
            0,
        ))?;
        for entry in config.callbacks {
            self.syspm.register_callback(*entry)?;
        }
        if config.lock_deep_sleep {
            self.syspm.lock_deep_sleep()?;
            debug!("board: deep sleep locked");
        }
        Ok(())
    }

    /// Stage 5 on its own: claim every board-reserved block in order.
    ///
    /// Under [`ConflictPolicy::Fail`] the first conflict aborts; blocks
    /// claimed before it stay claimed.
    pub fn reserve_board_resources(&self, config: &BoardConfig) -> BoardInitResult {
        for &desc in config.reserved {
            match self.registry.reserve(desc) {
                Ok(()) => {}
                Err(HwmgrError::Conflict(_))
                    if config.conflict_policy == ConflictPolicy::WarnAndContinue =>
                {
                    warn!(
                        "board: {} already reserved by the application, skipped",
                        desc
                    );
                }
                Err(e) => return Err(BoardInitError::new(Stage::ResourceReservation, e)),
            }
        }
        Ok(())
    }

    /// Forget every reservation and callback and return to
    /// [`BoardState::Uninitialized`]. For tests; hardware is left as it is.
    pub fn teardown(&mut self) {
        self.registry.reset();
        self.syspm.reset();
        self.state = BoardState::Uninitialized;
    }
}

/// Initialize `board` with the tables of the board selected at build time.
pub fn board_init<P: Platform + ?Sized, const CALLBACKS: usize>(
    board: &mut Board<CALLBACKS>,
    platform: &mut P,
) -> BoardInitResult {
    board.init(platform, &BoardConfig::current())
}

// region: Error Types

/// Why a stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    Hwmgr(HwmgrError),
    Pm(PmError),
    Config(ConfigError),
}

impl Cause {
    /// The contested block, if this is a reservation conflict.
    pub fn conflict(&self) -> Option<ResourceDescriptor> {
        match self {
            Cause::Hwmgr(HwmgrError::Conflict(desc)) => Some(*desc),
            _ => None,
        }
    }
}

impl From<HwmgrError> for Cause {
    fn from(e: HwmgrError) -> Self {
        Cause::Hwmgr(e)
    }
}

impl From<PmError> for Cause {
    fn from(e: PmError) -> Self {
        Cause::Pm(e)
    }
}

impl From<ConfigError> for Cause {
    fn from(e: ConfigError) -> Self {
        Cause::Config(e)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Hwmgr(e) => e.fmt(f),
            Cause::Pm(e) => e.fmt(f),
            Cause::Config(e) => e.fmt(f),
        }
    }
}

/// First failure of a board init, with the stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "board init errors must be handled"]
pub struct BoardInitError {
    pub stage: Stage,
    pub cause: Cause,
}

impl BoardInitError {
    pub fn new(stage: Stage, cause: impl Into<Cause>) -> Self {
        Self {
            stage,
            cause: cause.into(),
        }
    }
}

impl fmt::Display for BoardInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stage {} ({}) failed: {}",
            self.stage.number(),
            self.stage.name(),
            self.cause
        )
    }
}

impl core::error::Error for BoardInitError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.cause {
            Cause::Hwmgr(e) => Some(e),
            Cause::Pm(e) => Some(e),
            Cause::Config(e) => Some(e),
        }
    }
}

// endregion

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::current::RESOURCE_LAYOUT;
    use core::cell::Cell;
    use hal::resource::clock_block;
    use hal::supply::SupplyControl;
    use hal::syspm::{PowerCallback, Transition};
    use std::sync::Mutex;

    const CLOCK1: ResourceDescriptor = ResourceDescriptor::clock(clock_block::PERIPHERAL_16BIT, 0);
    const CLOCK2: ResourceDescriptor = ResourceDescriptor::clock(clock_block::PERIPHERAL_16BIT, 1);

    type Trace = &'static Mutex<Vec<(&'static str, Transition)>>;

    struct Tracer {
        name: &'static str,
        trace: Trace,
    }

    impl PowerCallback for Tracer {
        fn on_transition(&self, transition: Transition, _context: usize) {
            self.trace.lock().unwrap().push((self.name, transition));
        }
    }

    fn tracer(name: &'static str, trace: Trace) -> &'static Tracer {
        Box::leak(Box::new(Tracer { name, trace }))
    }

    #[derive(Default)]
    struct MockSupply {
        set: Vec<(Supply, u16)>,
    }

    impl SupplyControl for MockSupply {
        fn set_supply_voltage(&mut self, supply: Supply, mv: u16) -> Result<(), ConfigError> {
            self.set.push((supply, mv));
            Ok(())
        }
    }

    /// Records collaborator calls; fails the call named in `fail_at`.
    struct MockPlatform {
        calls: Vec<&'static str>,
        fail_at: Option<&'static str>,
        supply: Option<MockSupply>,
        sysclk: &'static Tracer,
        sysclk_requests: Cell<u32>,
    }

    impl MockPlatform {
        fn new(trace: Trace) -> Self {
            Self {
                calls: Vec::new(),
                fail_at: None,
                supply: Some(MockSupply::default()),
                sysclk: tracer("sysclk", trace),
                sysclk_requests: Cell::new(0),
            }
        }

        fn failing_at(trace: Trace, call: &'static str) -> Self {
            Self {
                fail_at: Some(call),
                ..Self::new(trace)
            }
        }

        fn step(&mut self, call: &'static str) -> Result<(), ConfigError> {
            self.calls.push(call);
            if self.fail_at == Some(call) {
                Err(ConfigError::new(call, 0xBAD))
            } else {
                Ok(())
            }
        }
    }

    impl Platform for MockPlatform {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn init_power_management(&mut self) -> Result<(), ConfigError> {
            self.step("power")
        }

        fn supply(&mut self) -> Option<&mut dyn SupplyControl> {
            self.calls.push("supply");
            self.supply.as_mut().map(|s| s as &mut dyn SupplyControl)
        }

        fn apply_clock_and_peripheral_config(
            &mut self,
            _table: &SystemConfig,
        ) -> Result<(), ConfigError> {
            self.step("clocks")
        }

        fn apply_pin_config(&mut self, pins: &[PinConfig]) -> Result<(), ConfigError> {
            assert_eq!(pins.len(), board::PINS.len());
            self.step("pins")
        }

        fn sysclk_pm_handler(&self) -> &'static dyn PowerCallback {
            self.sysclk_requests.set(self.sysclk_requests.get() + 1);
            self.sysclk
        }
    }

    fn trace() -> Trace {
        Box::leak(Box::new(Mutex::new(Vec::new())))
    }

    fn fresh_board() -> Board<4> {
        Board::new(&RESOURCE_LAYOUT)
    }

    fn config() -> BoardConfig {
        BoardConfig {
            lock_deep_sleep: false,
            ..BoardConfig::current()
        }
    }

    #[test]
    fn clean_init_succeeds() {
        let mut board = fresh_board();
        let mut platform = MockPlatform::new(trace());

        assert_eq!(board.init(&mut platform, &config()), Ok(()));
        assert_eq!(board.state(), BoardState::Ready);
        assert_eq!(platform.calls, vec!["power", "supply", "clocks", "pins"]);
        assert_eq!(platform.sysclk_requests.get(), 1);

        assert!(board.registry().is_reserved(CLOCK1));
        assert!(board.registry().is_reserved(CLOCK2));
        assert_eq!(board.registry().reserved_count(), 2);

        assert_eq!(board.syspm().callback_count(), 1);
        board.syspm().with_callbacks(|chain| {
            let entry = chain.iter().next().unwrap();
            assert_eq!(entry.order, SYSCLK_PM_CALLBACK_ORDER);
            assert_eq!(entry.mask, TransitionMask::DEEP_SLEEP);
        });

        let supply = platform.supply.as_ref().unwrap();
        assert_eq!(supply.set, vec![(Supply::Vdda, 3300)]);
        assert_eq!(board.syspm().supply_voltage(Supply::Vdda), Some(3300));
    }

    #[test]
    fn repeated_reservation_conflicts_on_first_descriptor() {
        let mut board = fresh_board();
        let mut platform = MockPlatform::new(trace());
        let config = config();
        board.init(&mut platform, &config).unwrap();

        let err = board.reserve_board_resources(&config).unwrap_err();
        assert_eq!(err.stage, Stage::ResourceReservation);
        assert_eq!(err.cause, Cause::Hwmgr(HwmgrError::Conflict(CLOCK1)));
        assert_eq!(err.cause.conflict(), Some(CLOCK1));
    }

    #[test]
    fn configuration_failure_stops_before_callbacks_and_reservations() {
        for call in ["clocks", "pins"] {
            let mut board = fresh_board();
            let mut platform = MockPlatform::failing_at(trace(), call);

            let err = board.init(&mut platform, &config()).unwrap_err();
            assert_eq!(err.stage, Stage::Configuration);
            assert_eq!(err.cause, Cause::Config(ConfigError::new(call, 0xBAD)));
            assert_eq!(board.state(), BoardState::Failed(Stage::Configuration));

            assert_eq!(platform.sysclk_requests.get(), 0);
            assert_eq!(board.syspm().callback_count(), 0);
            assert_eq!(board.registry().reserved_count(), 0);
        }
    }

    #[test]
    fn clocks_are_applied_before_pins() {
        let mut board = fresh_board();
        let mut platform = MockPlatform::failing_at(trace(), "clocks");
        let err = board.init(&mut platform, &config()).unwrap_err();
        assert_eq!(err.stage, Stage::Configuration);
        assert_eq!(platform.calls, vec!["power", "supply", "clocks"]);
    }

    #[test]
    fn power_management_failure_is_stage_one() {
        let mut board = fresh_board();
        let mut platform = MockPlatform::failing_at(trace(), "power");
        let err = board.init(&mut platform, &config()).unwrap_err();
        assert_eq!(err.stage, Stage::PowerManagement);
        assert_eq!(platform.calls, vec!["power"]);
    }

    #[test]
    fn oversized_layout_fails_stage_one() {
        static HUGE: ResourceLayout = ResourceLayout::new(&[hal::hwmgr::BlockLayout::new(
            hal::resource::ResourceKind::Dma,
            &[1024, 1],
        )]);
        let mut board: Board<4> = Board::new(&HUGE);
        let mut platform = MockPlatform::new(trace());
        let err = board.init(&mut platform, &config()).unwrap_err();
        assert_eq!(err.stage, Stage::PowerManagement);
        assert!(matches!(
            err.cause,
            Cause::Hwmgr(HwmgrError::LayoutTooLarge { required: 1025, .. })
        ));
        assert!(platform.calls.is_empty());
    }

    #[test]
    fn supply_stage_is_skipped_without_regulator() {
        let mut board = fresh_board();
        let mut platform = MockPlatform {
            supply: None,
            ..MockPlatform::new(trace())
        };
        board.init(&mut platform, &config()).unwrap();
        assert_eq!(board.syspm().supply_voltage(Supply::Vdda), None);

        let mut board = fresh_board();
        let mut platform = MockPlatform::new(trace());
        let no_vdda = BoardConfig {
            vdda_mv: None,
            ..config()
        };
        board.init(&mut platform, &no_vdda).unwrap();
        assert!(!platform.calls.contains(&"supply"));
        assert!(platform.supply.unwrap().set.is_empty());
    }

    #[test]
    fn sysclk_runs_last_into_deep_sleep_and_first_out() {
        static TRACE: Mutex<Vec<(&str, Transition)>> = Mutex::new(Vec::new());
        static RADIO: Tracer = Tracer {
            name: "radio",
            trace: &TRACE,
        };
        static EXTRAS: [CallbackEntry; 1] =
            [CallbackEntry::new(10, TransitionMask::DEEP_SLEEP, &RADIO, 0)];

        let mut board = fresh_board();
        let mut platform = MockPlatform::new(&TRACE);
        let config = BoardConfig {
            callbacks: &EXTRAS,
            ..config()
        };
        board.init(&mut platform, &config).unwrap();

        board.syspm().dispatch(Transition::DeepSleepEnter).unwrap();
        board.syspm().dispatch(Transition::DeepSleepExit).unwrap();
        let names: Vec<&str> = TRACE.lock().unwrap().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["radio", "sysclk", "sysclk", "radio"]);
    }

    #[test]
    fn callback_clash_with_sysclk_order_fails_stage_four() {
        static TRACE: Mutex<Vec<(&str, Transition)>> = Mutex::new(Vec::new());
        static GREEDY: Tracer = Tracer {
            name: "greedy",
            trace: &TRACE,
        };
        static EXTRAS: [CallbackEntry; 1] = [CallbackEntry::new(
            SYSCLK_PM_CALLBACK_ORDER,
            TransitionMask::DEEP_SLEEP,
            &GREEDY,
            0,
        )];

        let mut board = fresh_board();
        let mut platform = MockPlatform::new(&TRACE);
        let config = BoardConfig {
            callbacks: &EXTRAS,
            ..config()
        };
        let err = board.init(&mut platform, &config).unwrap_err();
        assert_eq!(err.stage, Stage::CallbackRegistration);
        assert_eq!(
            err.cause,
            Cause::Pm(PmError::DuplicateOrder {
                order: SYSCLK_PM_CALLBACK_ORDER
            })
        );
        assert_eq!(board.registry().reserved_count(), 0);
    }

    #[test]
    fn deep_sleep_lock_is_taken_when_configured() {
        let mut board = fresh_board();
        let mut platform = MockPlatform::new(trace());
        let config = BoardConfig {
            lock_deep_sleep: true,
            ..config()
        };
        board.init(&mut platform, &config).unwrap();
        assert!(board.syspm().deep_sleep_locked());
        assert_eq!(
            board.syspm().dispatch(Transition::DeepSleepEnter),
            Err(PmError::DeepSleepLocked)
        );
    }

    #[test]
    fn prior_user_reservation_fails_by_default() {
        let mut board = fresh_board();
        board.registry().reserve(CLOCK2).unwrap();
        let mut platform = MockPlatform::new(trace());

        let err = board.init(&mut platform, &config()).unwrap_err();
        assert_eq!(err.stage, Stage::ResourceReservation);
        assert_eq!(err.cause.conflict(), Some(CLOCK2));
        // No rollback of what came before.
        assert!(board.registry().is_reserved(CLOCK1));
        assert_eq!(board.syspm().callback_count(), 1);
    }

    #[test]
    fn prior_user_reservation_tolerated_when_configured() {
        let mut board = fresh_board();
        board.registry().reserve(CLOCK1).unwrap();
        let mut platform = MockPlatform::new(trace());
        let config = BoardConfig {
            conflict_policy: ConflictPolicy::WarnAndContinue,
            ..config()
        };

        assert_eq!(board.init(&mut platform, &config), Ok(()));
        assert!(board.registry().is_reserved(CLOCK2));
        assert_eq!(board.registry().reserved_count(), 2);
    }

    #[test]
    fn second_init_fails_registering_sysclk_again() {
        let mut board = fresh_board();
        let mut platform = MockPlatform::new(trace());
        board.init(&mut platform, &config()).unwrap();

        let err = board.init(&mut platform, &config()).unwrap_err();
        assert_eq!(err.stage, Stage::CallbackRegistration);
        assert_eq!(board.state(), BoardState::Failed(Stage::CallbackRegistration));
    }

    #[test]
    fn teardown_allows_a_fresh_init() {
        let mut board = fresh_board();
        let mut platform = MockPlatform::new(trace());
        board.init(&mut platform, &config()).unwrap();

        board.teardown();
        assert_eq!(board.state(), BoardState::Uninitialized);
        assert_eq!(board.registry().reserved_count(), 0);
        assert_eq!(board.syspm().callback_count(), 0);

        assert_eq!(board.init(&mut platform, &config()), Ok(()));
    }

    #[test]
    fn board_init_uses_compiled_in_tables() {
        let mut board = fresh_board();
        let mut platform = MockPlatform::new(trace());
        board_init(&mut board, &mut platform).unwrap();
        assert_eq!(
            board.syspm().deep_sleep_locked(),
            !cfg!(feature = "deep-sleep-idle")
        );
        assert!(board.registry().is_reserved(CLOCK1));
    }

    #[test]
    fn error_display_names_stage_and_cause() {
        let err = BoardInitError::new(Stage::ResourceReservation, HwmgrError::Conflict(CLOCK1));
        assert_eq!(
            format!("{err}"),
            "stage 5 (resource reservation) failed: clock[1.0] is already reserved"
        );
    }
}

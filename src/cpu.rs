//! Processor core: registers, flags and the cycle-stepped fetch/execute loop.
//!
//! Besides A, X, Y, PC, SP and the flags, the CPU tracks how many cycles remain of
//! the instruction in progress and a running cycle total that resets never clear.
//!
//! The CPU owns no memory. Every `clock`/`step`/`reset` call is handed the
//! [`MemoryBus`] to run against, which lets the [`Bus`](crate::Bus) drive the CPU
//! as one of its components.
//!
//! [`CPU::clock`] advances one cycle and only fetches once the previous instruction
//! has used up its cycles. [`CPU::step`] and [`CPU::run_for_cycles`] are built on it.
//! An instruction does all its work on its first cycle and idles for the rest, so
//! memory side effects land at the start of an instruction.
//!
//! ## Variants
//!
//! [`Variant::Nmos`] runs the original MOS 6502 instruction set, including the
//! indirect JMP page bug. [`Variant::Nes`] is the same core as found in the Ricoh
//! 2A03, whose ADC/SBC ignore the D flag. [`Variant::Cmos`] runs the WDC 65C02 set
//! with its extra instructions and addressing modes plus the WAI/STP run states.

use std::collections::HashMap;
use std::fmt;

use crate::addressing::Operand;
use crate::bus::Component;
use crate::devices::{InterruptKind, InterruptLine};
use crate::instructions;
use crate::{AddressingMode, ExecutionError, MemoryBus, OpcodeMetadata, Operation};
use crate::{CMOS_OPCODES, NMOS_OPCODES};

/// Address of the non-maskable interrupt vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// How many times breakpoint handlers may move PC within a single fetch before
/// the CPU stops consulting them and executes at the current PC.
pub const MAX_BREAKPOINT_REDIRECTS: usize = 16;


/// Which member of the 6502 family is emulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// The original NMOS 6502.
    #[default]
    Nmos,
    /// The CMOS 65C02.
    Cmos,
    /// The NES 2A03: NMOS opcodes, no decimal mode, 7-cycle reset.
    Nes,
}

impl Variant {
    /// The opcode table this variant decodes with.
    pub fn opcode_table(self) -> &'static [OpcodeMetadata; 256] {
        match self {
            Variant::Nmos | Variant::Nes => &NMOS_OPCODES,
            Variant::Cmos => &CMOS_OPCODES,
        }
    }

    /// Cycles the reset sequence takes before the first opcode fetch.
    pub fn reset_cycles(self) -> u8 {
        match self {
            Variant::Nmos | Variant::Cmos => 8,
            Variant::Nes => 7,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Nmos => write!(f, "6502"),
            Variant::Cmos => write!(f, "65C02"),
            Variant::Nes => write!(f, "2A03"),
        }
    }
}

/// Execution state of the CPU.
///
/// Only the 65C02 ever leaves `Normal`, through WAI or STP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    #[default]
    Normal,
    /// WAI executed; idle until an interrupt is requested.
    Waiting,
    /// STP executed; idle until an interrupt is requested, then restart through
    /// the reset vector.
    Stopped,
}

/// CPU construction options.
///
/// # Examples
///
/// ```
/// use sim6502::{CpuConfig, Variant};
///
/// let config = CpuConfig {
///     variant: Variant::Cmos,
///     ..CpuConfig::default()
/// };
/// assert!(!config.stop_on_brk);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuConfig {
    pub variant: Variant,
    /// Return `ExecutionError::StoppedOnBrk` instead of executing BRK.
    pub stop_on_brk: bool,
}

/// What a breakpoint handler wants the CPU to do with the instruction it stopped on.
///
/// When several fields are set, `change_pc` wins over `change_opcode`, which wins
/// over `cause_brk`. The default action continues unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreakpointAction {
    /// Continue fetching at this address instead.
    pub change_pc: Option<u16>,
    /// Execute this opcode instead of the one in memory.
    pub change_opcode: Option<u8>,
    /// Execute a BRK instead of the instruction in memory.
    pub cause_brk: bool,
}

/// A breakpoint callback. It receives the CPU and the address it fired at.
pub type BreakpointHandler = Box<dyn FnMut(&mut CPU, u16) -> BreakpointAction>;

/// A point-in-time copy of the CPU registers.
///
/// Its `Display` form is the single-line trace emitted on every opcode fetch:
///
/// ```text
/// cycle:8 - pc=8000 A=00 X=00 Y=00 SP=FD n=0 v=0 b=0 d=0 i=1 z=0 c=0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub cycles: u64,
    pub instr_cycles: u8,
    pub current_opcode: u8,
    pub run_state: RunState,
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |bit: u8| (self.status >> bit) & 1;
        write!(
            f,
            "cycle:{} - pc={:04X} A={:02X} X={:02X} Y={:02X} SP={:02X} n={} v={} b={} d={} i={} z={} c={}",
            self.cycles,
            self.pc,
            self.a,
            self.x,
            self.y,
            self.sp,
            flag(7),
            flag(6),
            flag(4),
            flag(3),
            flag(2),
            flag(1),
            flag(0)
        )
    }
}

/// An NMOS 6502 or CMOS 65C02, depending on [`CpuConfig::variant`].
///
/// Memory is not owned; it is passed into every call as a [`MemoryBus`].
///
/// ```
/// use sim6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0xFFFC, &[0x00, 0x80]);
///
/// let mut cpu = CPU::new(CpuConfig::default());
/// cpu.reset(&mut memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i());
/// assert_eq!(cpu.instr_cycles(), 8);
/// ```
pub struct CPU {
    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) pc: u16,
    /// Offset into page one
    pub(crate) sp: u8,

    pub(crate) flag_n: bool,
    pub(crate) flag_v: bool,
    pub(crate) flag_b: bool,
    pub(crate) flag_d: bool,
    pub(crate) flag_i: bool,
    pub(crate) flag_z: bool,
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed, never reset
    pub(crate) cycles: u64,

    /// Cycles left before the next opcode fetch
    pub(crate) instr_cycles: u8,

    /// Opcode of the instruction in progress
    pub(crate) current_opcode: u8,

    pub(crate) config: CpuConfig,
    pub(crate) run_state: RunState,

    /// Requests from devices, sampled at fetch boundaries
    pub(crate) interrupts: InterruptLine,

    /// The hardware interrupt being serviced by the current pseudo-BRK, if any
    pub(crate) servicing: Option<(InterruptKind, &'static str)>,

    breakpoints: HashMap<u16, BreakpointHandler>,
    brk_handler: Option<BreakpointHandler>,
}

impl CPU {
    /// Creates a CPU in the power-on state.
    ///
    /// PC is 0 until [`reset`](CPU::reset) loads it from the reset vector.
    pub fn new(config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            instr_cycles: 0,
            current_opcode: 0x00,
            config,
            run_state: RunState::Normal,
            interrupts: InterruptLine::new(),
            servicing: None,
            breakpoints: HashMap::new(),
            brk_handler: None,
        }
    }

    /// Zeroes A, X and Y, sets SP to 0xFD with only I set, loads PC from
    /// [`RESET_VECTOR`] and drops pending requests and any WAI/STP state.
    ///
    /// The next [`Variant::reset_cycles`] cycles belong to the reset sequence.
    /// `cycles()` keeps counting.
    pub fn reset<M: MemoryBus + ?Sized>(&mut self, mem: &mut M) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.set_status(0b0000_0100);
        self.pc = mem.read_word(RESET_VECTOR);
        self.instr_cycles = self.config.variant.reset_cycles();
        self.current_opcode = 0x00;
        self.run_state = RunState::Normal;
        self.interrupts.clear_all();
        self.servicing = None;
        log::info!("{} reset, PC=${:04X}", self.config.variant, self.pc);
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// When the current instruction still has cycles left, this only counts one
    /// of them. Otherwise it fetches the next opcode (or services a pending
    /// interrupt) and executes it.
    ///
    /// # Errors
    ///
    /// - `InvalidOpcode` for a JAM opcode
    /// - `UnimplementedOpcode` for an undocumented NMOS opcode with data effects
    /// - `StoppedOnBrk` for BRK when `stop_on_brk` is configured
    ///
    /// In all cases the CPU stays at the fetch boundary of the faulting opcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0200, &[0xA9, 0x42]); // LDA #$42
    ///
    /// let mut cpu = CPU::new(CpuConfig::default());
    /// cpu.set_pc(0x0200);
    ///
    /// cpu.clock(&mut mem).unwrap(); // fetch and execute
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(cpu.instr_cycles(), 1);
    ///
    /// cpu.clock(&mut mem).unwrap(); // second cycle of LDA
    /// assert_eq!(cpu.instr_cycles(), 0);
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn clock<M: MemoryBus + ?Sized>(&mut self, mem: &mut M) -> Result<(), ExecutionError> {
        match self.run_state {
            RunState::Normal => {}
            RunState::Waiting => {
                if self.interrupts.is_asserted() {
                    log::debug!("WAI released by interrupt request");
                    self.run_state = RunState::Normal;
                    self.instr_cycles = 1;
                }
                return Ok(());
            }
            RunState::Stopped => {
                if self.interrupts.is_asserted() {
                    self.pc = mem.read_word(RESET_VECTOR);
                    self.run_state = RunState::Normal;
                    self.interrupts.clear_all();
                    log::debug!("STP released, restarting at ${:04X}", self.pc);
                }
                return Ok(());
            }
        }

        if self.instr_cycles == 0 {
            self.fetch_and_execute(mem)?;
        }

        self.instr_cycles = self.instr_cycles.saturating_sub(1);
        self.cycles += 1;
        Ok(())
    }

    /// Runs one whole instruction.
    ///
    /// Any cycles still outstanding from the previous instruction (or from the
    /// reset sequence) are run first, then the next instruction is fetched and
    /// clocked until it is complete. In the `Waiting`/`Stopped` run states this is
    /// a single `clock()`.
    ///
    /// ```
    /// use sim6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFC, &[0x00, 0x80]);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(CpuConfig::default());
    /// cpu.reset(&mut mem);
    /// cpu.step(&mut mem).unwrap();
    ///
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.cycles(), 8 + 2); // reset sequence + NOP
    /// ```
    pub fn step<M: MemoryBus + ?Sized>(&mut self, mem: &mut M) -> Result<(), ExecutionError> {
        if self.run_state != RunState::Normal {
            return self.clock(mem);
        }

        while self.instr_cycles > 0 {
            self.clock(mem)?;
        }

        self.clock(mem)?;
        while self.instr_cycles > 0 && self.run_state == RunState::Normal {
            self.clock(mem)?;
        }
        Ok(())
    }

    /// Steps whole instructions until at least `cycle_budget` cycles have run and
    /// returns how many did, which can overshoot by part of an instruction.
    ///
    /// Stops early when the CPU sleeps in WAI or STP with no request pending.
    ///
    /// ```
    /// use sim6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x8000, &[0x4C, 0x00, 0x80]); // JMP $8000
    ///
    /// let mut cpu = CPU::new(CpuConfig::default());
    /// cpu.set_pc(0x8000);
    ///
    /// let consumed = cpu.run_for_cycles(&mut mem, 10).unwrap();
    /// assert_eq!(consumed, 12); // four 3-cycle jumps
    /// ```
    pub fn run_for_cycles<M: MemoryBus + ?Sized>(
        &mut self,
        mem: &mut M,
        cycle_budget: u64,
    ) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            if self.run_state != RunState::Normal && !self.interrupts.is_asserted() {
                break;
            }
            self.step(mem)?;
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Fetch / Decode ==========

    fn fetch_and_execute<M: MemoryBus + ?Sized>(
        &mut self,
        mem: &mut M,
    ) -> Result<(), ExecutionError> {
        let opcode = self.fetch_opcode(mem);
        let pc = self.pc;
        let metadata = &self.config.variant.opcode_table()[opcode as usize];

        if self.servicing.is_none() {
            match metadata.operation {
                Operation::Jam => return Err(ExecutionError::InvalidOpcode { opcode, pc }),
                Operation::Illegal => {
                    return Err(ExecutionError::UnimplementedOpcode {
                        opcode,
                        mnemonic: metadata.mnemonic,
                        pc,
                    })
                }
                Operation::Brk if self.config.stop_on_brk => {
                    return Err(ExecutionError::StoppedOnBrk { pc })
                }
                _ => {}
            }
            // The pseudo-fetch of an interrupt leaves PC on the interrupted instruction.
            self.pc = self.pc.wrapping_add(1);
        }

        self.current_opcode = opcode;
        self.instr_cycles = metadata.base_cycles;
        let operand = self.resolve_operand(mem, metadata.addressing_mode);
        instructions::execute(self, mem, metadata.operation, operand);
        Ok(())
    }

    /// Picks the opcode to execute at this fetch boundary.
    ///
    /// A pending interrupt turns into a BRK without touching memory. Otherwise the
    /// byte at PC is read and offered to the breakpoint handlers, which may
    /// replace it or move PC (in which case the fetch starts over).
    fn fetch_opcode<M: MemoryBus + ?Sized>(&mut self, mem: &mut M) -> u8 {
        let mut redirects = 0;
        loop {
            if let Some(request) = self.interrupts.pending(self.flag_i) {
                self.servicing = Some(request);
                return 0x00;
            }
            self.servicing = None;

            let pc = self.pc;
            let mut opcode = mem.read(pc);
            if log::log_enabled!(log::Level::Trace) {
                log::trace!("{}", self.snapshot());
            }

            if redirects >= MAX_BREAKPOINT_REDIRECTS {
                log::warn!(
                    "breakpoints redirected PC {redirects} times, executing at ${pc:04X}"
                );
                return opcode;
            }

            if let Some(action) = self.invoke_breakpoint(pc) {
                opcode = self.apply_breakpoint_action(action, opcode);
                if self.pc != pc {
                    redirects += 1;
                    log::debug!("breakpoint at ${pc:04X} moved PC to ${:04X}", self.pc);
                    continue;
                }
            }

            if opcode == 0x00 {
                if let Some(action) = self.invoke_brk_handler(pc) {
                    opcode = self.apply_breakpoint_action(action, opcode);
                    if self.pc != pc {
                        redirects += 1;
                        log::debug!("BRK handler at ${pc:04X} moved PC to ${:04X}", self.pc);
                        continue;
                    }
                }
            }

            return opcode;
        }
    }

    fn apply_breakpoint_action(&mut self, action: BreakpointAction, opcode: u8) -> u8 {
        if let Some(pc) = action.change_pc {
            self.pc = pc;
            opcode
        } else if let Some(replacement) = action.change_opcode {
            replacement
        } else if action.cause_brk {
            0x00
        } else {
            opcode
        }
    }

    // The handler is taken out of the map while it runs so it can borrow the CPU.
    fn invoke_breakpoint(&mut self, pc: u16) -> Option<BreakpointAction> {
        let mut handler = self.breakpoints.remove(&pc)?;
        let action = handler(self, pc);
        self.breakpoints.entry(pc).or_insert(handler);
        Some(action)
    }

    fn invoke_brk_handler(&mut self, pc: u16) -> Option<BreakpointAction> {
        let mut handler = self.brk_handler.take()?;
        let action = handler(self, pc);
        if self.brk_handler.is_none() {
            self.brk_handler = Some(handler);
        }
        Some(action)
    }

    /// Reads the operand bytes following the opcode and resolves the effective operand.
    fn resolve_operand<M: MemoryBus + ?Sized>(
        &mut self,
        mem: &mut M,
        mode: AddressingMode,
    ) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.read_pc_byte(mem)),
            AddressingMode::ZeroPage => Operand::Address(self.read_pc_byte(mem) as u16),
            AddressingMode::ZeroPageX => {
                Operand::Address(self.read_pc_byte(mem).wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                Operand::Address(self.read_pc_byte(mem).wrapping_add(self.y) as u16)
            }
            AddressingMode::Relative => {
                let offset = self.read_pc_byte(mem) as i8;
                Operand::Address(self.pc.wrapping_add(offset as i16 as u16))
            }
            AddressingMode::Absolute => Operand::Address(self.read_pc_word(mem)),
            AddressingMode::AbsoluteX => {
                Operand::Address(self.read_pc_word(mem).wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                Operand::Address(self.read_pc_word(mem).wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let pointer = self.read_pc_word(mem);
                let lo = mem.read(pointer);
                // NMOS bug: the high byte never comes from the next page
                let hi_address = if self.config.variant != Variant::Cmos && pointer & 0xFF == 0xFF
                {
                    pointer & 0xFF00
                } else {
                    pointer.wrapping_add(1)
                };
                Operand::Address(u16::from_le_bytes([lo, mem.read(hi_address)]))
            }
            AddressingMode::IndirectX => {
                let zp = self.read_pc_byte(mem).wrapping_add(self.x);
                Operand::Address(read_zero_page_word(mem, zp))
            }
            AddressingMode::IndirectY => {
                let zp = self.read_pc_byte(mem);
                Operand::Address(read_zero_page_word(mem, zp).wrapping_add(self.y as u16))
            }
            AddressingMode::ZeroPageRelative => {
                let zp = self.read_pc_byte(mem);
                let offset = self.read_pc_byte(mem) as i8;
                Operand::ZeroPageBranch {
                    address: zp as u16,
                    target: self.pc.wrapping_add(offset as i16 as u16),
                }
            }
            AddressingMode::ZeroPageIndirect => {
                let zp = self.read_pc_byte(mem);
                Operand::Address(read_zero_page_word(mem, zp))
            }
            AddressingMode::AbsoluteIndexedIndirect => {
                let pointer = self.read_pc_word(mem).wrapping_add(self.x as u16);
                Operand::Address(mem.read_word(pointer))
            }
        }
    }

    fn read_pc_byte<M: MemoryBus + ?Sized>(&mut self, mem: &M) -> u8 {
        let value = mem.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn read_pc_word<M: MemoryBus + ?Sized>(&mut self, mem: &M) -> u16 {
        let lo = self.read_pc_byte(mem);
        let hi = self.read_pc_byte(mem);
        u16::from_le_bytes([lo, hi])
    }

    // ========== Stack ==========

    pub(crate) fn push<M: MemoryBus + ?Sized>(&mut self, mem: &mut M, value: u8) {
        mem.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pop<M: MemoryBus + ?Sized>(&mut self, mem: &mut M) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        mem.read(0x0100 | self.sp as u16)
    }

    /// Pushes high byte first so the word sits little-endian in memory.
    pub(crate) fn push_word<M: MemoryBus + ?Sized>(&mut self, mem: &mut M, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(mem, hi);
        self.push(mem, lo);
    }

    pub(crate) fn pop_word<M: MemoryBus + ?Sized>(&mut self, mem: &mut M) -> u16 {
        let lo = self.pop(mem);
        let hi = self.pop(mem);
        u16::from_le_bytes([lo, hi])
    }

    // ========== Breakpoints ==========

    /// Registers `handler` to run whenever an opcode is about to be fetched from `address`.
    ///
    /// Replaces any handler already registered there.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::{BreakpointAction, CpuConfig, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0200, &[0xEA]);
    /// mem.load(0x0300, &[0xA9, 0x07]); // LDA #$07
    ///
    /// let mut cpu = CPU::new(CpuConfig::default());
    /// cpu.set_pc(0x0200);
    /// cpu.add_breakpoint(0x0200, |_cpu, _pc| BreakpointAction {
    ///     change_pc: Some(0x0300),
    ///     ..Default::default()
    /// });
    ///
    /// cpu.step(&mut mem).unwrap();
    /// assert_eq!(cpu.a(), 0x07);
    /// ```
    pub fn add_breakpoint<F>(&mut self, address: u16, handler: F)
    where
        F: FnMut(&mut CPU, u16) -> BreakpointAction + 'static,
    {
        self.breakpoints.insert(address, Box::new(handler));
    }

    /// Removes the breakpoint at `address`, returning true if there was one.
    pub fn remove_breakpoint(&mut self, address: u16) -> bool {
        self.breakpoints.remove(&address).is_some()
    }

    /// Registers a handler consulted whenever a BRK opcode is fetched, or clears it with `None`.
    pub fn set_brk_handler(&mut self, handler: Option<BreakpointHandler>) {
        self.brk_handler = handler;
    }

    // ========== Inspection ==========

    /// A handle devices use to request interrupts on this CPU.
    pub fn interrupt_line(&self) -> InterruptLine {
        self.interrupts.clone()
    }

    /// Copies the registers into a [`CpuState`].
    pub fn snapshot(&self) -> CpuState {
        CpuState {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            status: self.status(),
            cycles: self.cycles,
            instr_cycles: self.instr_cycles,
            current_opcode: self.current_opcode,
            run_state: self.run_state,
        }
    }

    pub fn config(&self) -> CpuConfig {
        self.config
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Cycles left in the current instruction.
    pub fn instr_cycles(&self) -> u8 {
        self.instr_cycles
    }

    /// Opcode of the instruction executed last (0x00 for interrupt servicing).
    pub fn current_opcode(&self) -> u8 {
        self.current_opcode
    }

    // ========== Register Getters ==========

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer; the stack lives at 0x0100 + SP and grows down.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Packed status byte, `NV1BDIZC`. Bit 5 always reads as 1.
    ///
    /// ```
    /// use sim6502::{CpuConfig, CPU};
    ///
    /// let cpu = CPU::new(CpuConfig::default());
    /// assert_eq!(cpu.status(), 0x24);
    /// ```
    pub fn status(&self) -> u8 {
        (u8::from(self.flag_n) << 7)
            | (u8::from(self.flag_v) << 6)
            | 0x20
            | (u8::from(self.flag_b) << 4)
            | (u8::from(self.flag_d) << 3)
            | (u8::from(self.flag_i) << 2)
            | (u8::from(self.flag_z) << 1)
            | u8::from(self.flag_c)
    }

    /// Cycles run since construction; resets do not clear it.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Flags ==========

    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Unpacks a status byte into the flags. Bit 5 is ignored.
    pub fn set_status(&mut self, value: u8) {
        let bit = |n: u8| value & (1 << n) != 0;
        self.flag_n = bit(7);
        self.flag_v = bit(6);
        self.flag_b = bit(4);
        self.flag_d = bit(3);
        self.flag_i = bit(2);
        self.flag_z = bit(1);
        self.flag_c = bit(0);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets Z and N from a result byte.
    pub(crate) fn update_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }
}

fn read_zero_page_word<M: MemoryBus + ?Sized>(mem: &M, zp: u8) -> u16 {
    u16::from_le_bytes([mem.read(zp as u16), mem.read(zp.wrapping_add(1) as u16)])
}

impl Component for CPU {
    fn clock(&mut self, bus: &mut dyn MemoryBus) -> Result<(), ExecutionError> {
        CPU::clock(self, bus)
    }

    fn reset(&mut self, bus: &mut dyn MemoryBus) {
        CPU::reset(self, bus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup() -> (CPU, FlatMemory) {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        let mut cpu = CPU::new(CpuConfig::default());
        cpu.reset(&mut mem);
        (cpu, mem)
    }

    #[test]
    fn test_cpu_reset_state() {
        let (cpu, _mem) = setup();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.instr_cycles(), 8);
        assert_eq!(cpu.status(), 0b0010_0100);
        assert_eq!(cpu.run_state(), RunState::Normal);
    }

    #[test]
    fn test_reset_drops_pending_interrupts() {
        let (mut cpu, mut mem) = setup();
        let line = cpu.interrupt_line();
        line.request_nmi("test");
        cpu.reset(&mut mem);
        assert!(!line.is_asserted());
    }

    #[test]
    fn test_status_round_trip_ignores_bit5() {
        let mut cpu = CPU::new(CpuConfig::default());
        cpu.set_status(0b1101_1011);
        assert_eq!(cpu.status(), 0b1111_1011);
        cpu.set_status(0x00);
        assert_eq!(cpu.status(), 0b0010_0000);
    }

    #[test]
    fn test_reset_cycles_precede_first_fetch() {
        let (mut cpu, mut mem) = setup();
        mem.load(0x8000, &[0xA9, 0x42]);

        for _ in 0..8 {
            cpu.clock(&mut mem).unwrap();
        }
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.pc(), 0x8000);

        cpu.clock(&mut mem).unwrap();
        assert_eq!(cpu.a(), 0x42);
        assert_eq!(cpu.cycles(), 9);
    }

    #[test]
    fn test_jam_leaves_cpu_at_fetch_boundary() {
        let (mut cpu, mut mem) = setup();
        mem.write(0x8000, 0x02);

        let err = cpu.step(&mut mem).unwrap_err();
        assert_eq!(
            err,
            ExecutionError::InvalidOpcode {
                opcode: 0x02,
                pc: 0x8000
            }
        );
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.instr_cycles(), 0);
    }

    #[test]
    fn test_snapshot_display() {
        let (cpu, _mem) = setup();
        assert_eq!(
            cpu.snapshot().to_string(),
            "cycle:0 - pc=8000 A=00 X=00 Y=00 SP=FD n=0 v=0 b=0 d=0 i=1 z=0 c=0"
        );
    }

    #[test]
    fn test_breakpoint_opcode_substitution() {
        let (mut cpu, mut mem) = setup();
        mem.load(0x8000, &[0xEA]);
        cpu.add_breakpoint(0x8000, |_cpu, _pc| BreakpointAction {
            change_opcode: Some(0xE8), // INX
            ..Default::default()
        });

        cpu.step(&mut mem).unwrap();
        assert_eq!(cpu.x(), 1);
        assert_eq!(cpu.pc(), 0x8001);
        assert!(cpu.remove_breakpoint(0x8000));
        assert!(!cpu.remove_breakpoint(0x8000));
    }

    #[test]
    fn test_breakpoint_redirect_loop_is_bounded() {
        let (mut cpu, mut mem) = setup();
        mem.load(0x8000, &[0xE8]); // INX
        mem.load(0x9000, &[0xC8]); // INY
        cpu.add_breakpoint(0x8000, |_cpu, _pc| BreakpointAction {
            change_pc: Some(0x9000),
            ..Default::default()
        });
        cpu.add_breakpoint(0x9000, |_cpu, _pc| BreakpointAction {
            change_pc: Some(0x8000),
            ..Default::default()
        });

        cpu.step(&mut mem).unwrap();
        // 16 redirects alternate 0x8000 -> 0x9000 -> ... and end back at 0x8000
        assert_eq!(cpu.x(), 1);
        assert_eq!(cpu.y(), 0);
        assert_eq!(cpu.pc(), 0x8001);
    }
}

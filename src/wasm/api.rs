//! WASM API for the 6502 emulator.
//!
//! The machine behind [`Emulator6502`] is wired as follows:
//!
//! | Range           | Device                                   |
//! |-----------------|------------------------------------------|
//! | `$0000-$7FFF`   | 32KB RAM                                 |
//! | `$C000-$C003`   | interval timer                           |
//! | `$C010-$C011`   | parallel port, output goes to JavaScript |
//! | `$E000-$FFFF`   | 8KB ROM, reset vector `$0600`            |

use crate::{
    disassemble, format_instruction, AddressRange, Assembler, Bus, ConfigError, CpuConfig,
    DisassemblyOptions, MemoryBus, ParallelPort, RamDevice, RomDevice, RunState, Timer, Variant,
    CPU,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

const PROGRAM_START: u16 = 0x0600;
const ROM_SIZE: usize = 0x2000;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

/// One line of disassembly
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    bus: Bus,
    cpu: Rc<RefCell<CPU>>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Builds the machine. Every byte written to the parallel port is passed to
    /// `on_output` as a one-character string.
    #[wasm_bindgen(constructor)]
    pub fn new(on_output: js_sys::Function, cmos: bool) -> Result<Emulator6502, JsError> {
        let variant = if cmos { Variant::Cmos } else { Variant::Nmos };
        let cpu = Rc::new(RefCell::new(CPU::new(CpuConfig {
            variant,
            ..Default::default()
        })));
        let bus = build_bus(&cpu, on_output)?;

        let mut emulator = Emulator6502 {
            bus,
            cpu,
            program_start: PROGRAM_START,
            program_end: PROGRAM_START,
        };
        emulator.reset();
        Ok(emulator)
    }

    /// Execute a single instruction. A CPU asleep in WAI or STP gets one clock.
    pub fn step(&mut self) -> Result<(), JsError> {
        loop {
            self.bus.clock()?;
            let cpu = self.cpu.borrow();
            if cpu.instr_cycles() == 0 || cpu.run_state() != RunState::Normal {
                return Ok(());
            }
        }
    }

    /// Run the whole machine for `cycles` clock cycles
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        for _ in 0..cycles {
            self.bus.clock()?;
        }
        Ok(cycles)
    }

    /// Reset every device and reload PC from the reset vector. RAM keeps its contents.
    pub fn reset(&mut self) {
        self.bus.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.borrow().a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.borrow().x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.borrow().y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.borrow().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.borrow().sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.borrow().status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.borrow().cycles() as f64 // JavaScript has no u64
    }

    /// The CPU state line, as traced at every fetch
    pub fn state(&self) -> String {
        self.cpu.borrow().snapshot().to_string()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.borrow_mut().set_pc(addr);
    }

    /// Request an interrupt: non-maskable if `nmi` is set
    pub fn interrupt(&mut self, nmi: bool) {
        let line = self.cpu.borrow().interrupt_line();
        if nmi {
            line.request_nmi("host");
        } else {
            line.request_irq("host");
        }
    }

    // Memory access methods

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Read a 256-byte page from memory
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.bus.read(start + i)).collect()
    }

    /// Hex dump of `from..=to`
    pub fn dump(&self, from: u16, to: u16) -> String {
        self.bus.dump(from, to)
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        for (i, &byte) in program.iter().enumerate() {
            self.bus.write(start_addr.wrapping_add(i as u16), byte);
        }
        self.cpu.borrow_mut().set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Assemble `source` into memory from `start_addr` and set PC there.
    /// Returns the number of bytes written.
    pub fn assemble(&mut self, source: &str, start_addr: u16) -> Result<u32, JsError> {
        let variant = self.cpu.borrow().variant();
        let mut assembler = Assembler::new(variant, start_addr);
        let lines = assembler.assemble(source, &mut self.bus)?;

        let size: usize = lines.iter().map(|line| line.bytes.len()).sum();
        self.cpu.borrow_mut().set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = assembler.address();
        Ok(size as u32)
    }

    /// Disassemble `num_instructions` instructions starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        // Three bytes per instruction is always enough
        let window: Vec<u8> = (0..num_instructions.saturating_mul(3).min(0x10000))
            .map(|i| self.bus.read(start_addr.wrapping_add(i as u16)))
            .collect();

        let options = DisassemblyOptions {
            start_address: start_addr,
            variant: self.cpu.borrow().variant(),
        };

        disassemble(&window, options)
            .iter()
            .take(num_instructions as usize)
            .map(|instr| {
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes: instr.raw_bytes().collect(),
                    text: format_instruction(instr),
                })
            })
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

fn build_bus(cpu: &Rc<RefCell<CPU>>, on_output: js_sys::Function) -> Result<Bus, ConfigError> {
    let mut bus = Bus::new();
    bus.add_component(Rc::clone(cpu));

    bus.add_device(
        AddressRange::new(0x0000, 0x7FFF)?,
        Rc::new(RefCell::new(RamDevice::new(0x8000))),
    )?;

    let timer = Timer::new(cpu.borrow().interrupt_line());
    bus.add_device(AddressRange::new(0xC000, 0xC003)?, Rc::new(RefCell::new(timer)))?;

    let mut port = ParallelPort::new();
    port.set_output_callback(move |byte| {
        let text = (byte as char).to_string();
        let _ = on_output.call1(&JsValue::NULL, &JsValue::from_str(&text));
    });
    bus.add_device(AddressRange::new(0xC010, 0xC011)?, Rc::new(RefCell::new(port)))?;

    let mut rom = vec![0xEA; ROM_SIZE];
    let [lo, hi] = PROGRAM_START.to_le_bytes();
    rom[ROM_SIZE - 4] = lo; // $FFFC
    rom[ROM_SIZE - 3] = hi;
    bus.add_device(
        AddressRange::new(0xE000, 0xFFFF)?,
        Rc::new(RefCell::new(RomDevice::new(rom)?)),
    )?;

    Ok(bus)
}

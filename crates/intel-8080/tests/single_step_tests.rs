//! State-vector tests in the `SingleStepTests` JSON format.
//!
//! Each case gives the initial CPU and RAM state, the expected final state,
//! and the number of cycles the instruction takes.

use emu_core::Cpu;
use intel_8080::{I8080, Memory, Pair, Reg};
use serde::Deserialize;

/// JSON test case format.
#[derive(Deserialize)]
struct TestCase {
    name: String,
    initial: CpuState,
    #[serde(rename = "final")]
    final_state: CpuState,
    cycles: u32,
}

/// JSON CPU state format.
#[derive(Deserialize)]
struct CpuState {
    pc: u16,
    sp: u16,
    a: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    f: u8,
    h: u8,
    l: u8,
    ram: Vec<(u16, u8)>,
}

const CASES: &str = r#"[
  {
    "name": "00 NOP",
    "initial": { "pc": 0, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 0]] },
    "final":   { "pc": 1, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 0]] },
    "cycles": 4
  },
  {
    "name": "01 LXI B",
    "initial": { "pc": 0, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 1], [1, 255], [2, 170]] },
    "final":   { "pc": 3, "sp": 0, "a": 0, "b": 170, "c": 255, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 1], [1, 255], [2, 170]] },
    "cycles": 10
  },
  {
    "name": "02 STAX B",
    "initial": { "pc": 0, "sp": 0, "a": 255, "b": 170, "c": 187, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 2]] },
    "final":   { "pc": 1, "sp": 0, "a": 255, "b": 170, "c": 187, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 2], [43707, 255]] },
    "cycles": 7
  },
  {
    "name": "03 INX B",
    "initial": { "pc": 0, "sp": 0, "a": 0, "b": 170, "c": 15, "d": 0, "e": 0, "f": 213, "h": 0, "l": 0,
                 "ram": [[0, 3]] },
    "final":   { "pc": 1, "sp": 0, "a": 0, "b": 170, "c": 16, "d": 0, "e": 0, "f": 213, "h": 0, "l": 0,
                 "ram": [[0, 3]] },
    "cycles": 5
  },
  {
    "name": "07 RLC",
    "initial": { "pc": 0, "sp": 0, "a": 170, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 7]] },
    "final":   { "pc": 1, "sp": 0, "a": 85, "b": 0, "c": 0, "d": 0, "e": 0, "f": 1, "h": 0, "l": 0,
                 "ram": [[0, 7]] },
    "cycles": 4
  },
  {
    "name": "0B DCX SP",
    "initial": { "pc": 0, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 59]] },
    "final":   { "pc": 1, "sp": 65535, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 59]] },
    "cycles": 5
  },
  {
    "name": "19 DAD D",
    "initial": { "pc": 0, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 1, "f": 0, "h": 255, "l": 255,
                 "ram": [[0, 25]] },
    "final":   { "pc": 1, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 1, "f": 1, "h": 0, "l": 0,
                 "ram": [[0, 25]] },
    "cycles": 10
  },
  {
    "name": "34 INR M",
    "initial": { "pc": 0, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 1, "h": 32, "l": 0,
                 "ram": [[0, 52], [8192, 127]] },
    "final":   { "pc": 1, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 129, "h": 32, "l": 0,
                 "ram": [[0, 52], [8192, 128]] },
    "cycles": 10
  },
  {
    "name": "3A LDA",
    "initial": { "pc": 0, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 58], [1, 52], [2, 18], [4660, 153]] },
    "final":   { "pc": 3, "sp": 0, "a": 153, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[0, 58], [1, 52], [2, 18], [4660, 153]] },
    "cycles": 13
  },
  {
    "name": "C3 JMP",
    "initial": { "pc": 256, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[256, 195], [257, 0], [258, 2]] },
    "final":   { "pc": 512, "sp": 0, "a": 0, "b": 0, "c": 0, "d": 0, "e": 0, "f": 0, "h": 0, "l": 0,
                 "ram": [[256, 195], [257, 0], [258, 2]] },
    "cycles": 10
  }
]"#;

/// Set up the CPU from the initial test state.
fn setup(state: &CpuState) -> I8080 {
    let mut memory = Memory::new();
    for &(addr, value) in &state.ram {
        memory.write_byte(addr, value);
    }

    let mut cpu = I8080::new(memory);
    let regs = cpu.registers_mut();
    regs.set(Reg::A, state.a);
    regs.set(Reg::F, state.f);
    regs.set(Reg::B, state.b);
    regs.set(Reg::C, state.c);
    regs.set(Reg::D, state.d);
    regs.set(Reg::E, state.e);
    regs.set(Reg::H, state.h);
    regs.set(Reg::L, state.l);
    regs.set_pair(Pair::SP, state.sp);
    cpu.set_pc(state.pc);
    cpu
}

/// Compare CPU state against the expected final state.
fn compare(cpu: &I8080, expected: &CpuState) -> Vec<String> {
    let regs = cpu.registers();
    let mut errors = Vec::new();

    let mut check = |name: &str, got: u16, want: u16| {
        if got != want {
            errors.push(format!("{name}: got {got:#06X}, want {want:#06X}"));
        }
    };
    check("pc", regs.pc(), expected.pc);
    check("sp", regs.sp(), expected.sp);
    check("a", regs.get(Reg::A).into(), expected.a.into());
    check("f", regs.get(Reg::F).into(), expected.f.into());
    check("b", regs.get(Reg::B).into(), expected.b.into());
    check("c", regs.get(Reg::C).into(), expected.c.into());
    check("d", regs.get(Reg::D).into(), expected.d.into());
    check("e", regs.get(Reg::E).into(), expected.e.into());
    check("h", regs.get(Reg::H).into(), expected.h.into());
    check("l", regs.get(Reg::L).into(), expected.l.into());

    for &(addr, want) in &expected.ram {
        let got = cpu.read_byte(addr);
        if got != want {
            errors.push(format!("ram[{addr:#06X}]: got {got:#04X}, want {want:#04X}"));
        }
    }
    errors
}

#[test]
fn single_step_vectors() {
    let cases: Vec<TestCase> = serde_json::from_str(CASES).expect("valid test JSON");
    let mut failures = Vec::new();

    for case in &cases {
        let mut cpu = setup(&case.initial);

        match cpu.step() {
            Ok(cycles) if cycles == case.cycles => {}
            Ok(cycles) => failures.push(format!(
                "{}: took {cycles} cycles, want {}",
                case.name, case.cycles
            )),
            Err(fault) => {
                failures.push(format!("{}: {fault}", case.name));
                continue;
            }
        }

        for error in compare(&cpu, &case.final_state) {
            failures.push(format!("{}: {error}", case.name));
        }
    }

    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

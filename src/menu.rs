//! Interactive text menu for building and running circuits.
//!
//! The session is generic over its reader and writer so it can be driven by
//! stdin/stdout in the binary and by in-memory buffers in tests. End of input
//! at any prompt ends the session cleanly.

use std::io::{self, BufRead, Write};

use rand::Rng;
use tracing::info;

use crate::circuit::Circuit;
use crate::config::SimulatorConfig;
use crate::display::format_state;
use crate::gate::Gate;
use crate::measure::counts;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    Phase,
    Identity,
    Cnot,
    RunAndMeasure,
    Exit,
    ShowCircuit,
    ClearCircuit,
    Sample,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::Hadamard,
            "2" => MenuChoice::PauliX,
            "3" => MenuChoice::PauliY,
            "4" => MenuChoice::PauliZ,
            "5" => MenuChoice::Phase,
            "6" => MenuChoice::Identity,
            "7" => MenuChoice::Cnot,
            "8" => MenuChoice::RunAndMeasure,
            "9" => MenuChoice::Exit,
            "10" => MenuChoice::ShowCircuit,
            "11" => MenuChoice::ClearCircuit,
            "12" => MenuChoice::Sample,
            _ => return None,
        };
        Some(choice)
    }

    /// Constructor for the single-qubit gate this entry adds, if any.
    fn single_qubit_gate(self) -> Option<fn(usize) -> Gate> {
        match self {
            MenuChoice::Hadamard => Some(Gate::H),
            MenuChoice::PauliX => Some(Gate::X),
            MenuChoice::PauliY => Some(Gate::Y),
            MenuChoice::PauliZ => Some(Gate::Z),
            MenuChoice::Phase => Some(Gate::S),
            MenuChoice::Identity => Some(Gate::I),
            _ => None,
        }
    }
}

const MENU: &str = "\
Quantum Gate Menu:
1. Hadamard Gate (Creates superposition)
2. Pauli-X Gate (Flips the qubit like NOT)
3. Pauli-Y Gate (Flips and adds phase)
4. Pauli-Z Gate (Adds phase to |1⟩)
5. Phase Gate (Rotates phase of |1⟩)
6. Identity Gate (Does nothing)
7. CNOT Gate (Controlled-NOT between 2 qubits)
8. Run Circuit and Measure
9. Exit
10. Show Circuit
11. Clear Circuit
12. Sample Many Shots";

/// One interactive session: prompts, circuit under construction and RNG.
pub struct Session<R, W, G> {
    input: R,
    output: W,
    rng: G,
    config: SimulatorConfig,
    qubits: Option<usize>,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(input: R, output: W, rng: G, config: SimulatorConfig) -> Self {
        Session {
            input,
            output,
            rng,
            config,
            qubits: None,
        }
    }

    /// Skip the qubit-count prompt when `qubits` is within the configured range.
    pub fn with_qubits(mut self, qubits: Option<usize>) -> Self {
        self.qubits = qubits.filter(|&n| n >= 1 && n <= self.config.max_qubits);
        self
    }

    /// Consumes the session, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Welcome to the Quantum Compute Engine!\n\
             This simulator supports basic quantum gates and simulates how a quantum circuit evolves."
        )?;

        let num_qubits = match self.qubits {
            Some(n) => n,
            None => match self.prompt_qubit_count()? {
                Some(n) => n,
                None => return Ok(()),
            },
        };
        let mut circuit = Circuit::new(num_qubits).map_err(io::Error::other)?;
        info!(num_qubits, "session started");

        loop {
            writeln!(self.output, "\n{}", MENU)?;
            write!(self.output, "\nChoose an option (1-12): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and 12."
                )?;
                continue;
            };

            let keep_going = self.handle(choice, &mut circuit)?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Executes one menu entry; returns false when the session should end.
    fn handle(&mut self, choice: MenuChoice, circuit: &mut Circuit) -> io::Result<bool> {
        let n = circuit.num_qubits();
        if let Some(make_gate) = choice.single_qubit_gate() {
            let Some(target) = self.prompt_index("target", n)? else {
                return Ok(false);
            };
            self.push_gate(circuit, make_gate(target))?;
            return Ok(true);
        }

        match choice {
            MenuChoice::Cnot => {
                let Some(control) = self.prompt_index("control", n)? else {
                    return Ok(false);
                };
                let target = loop {
                    let Some(target) = self.prompt_index("target", n)? else {
                        return Ok(false);
                    };
                    if target != control {
                        break target;
                    }
                    writeln!(self.output, "Control and target must be different qubits.")?;
                };
                self.push_gate(circuit, Gate::CNOT { control, target })?;
            }
            MenuChoice::RunAndMeasure => {
                let state = circuit.run();
                writeln!(self.output, "\nFinal quantum state amplitudes:")?;
                write!(self.output, "{}", format_state(&state))?;
                let label = circuit
                    .measure(&state, &mut self.rng)
                    .map_err(io::Error::other)?;
                writeln!(self.output, "\nSimulated measurement:")?;
                writeln!(self.output, "Measured output state: |{}⟩", label)?;
            }
            MenuChoice::ShowCircuit => {
                if circuit.is_empty() {
                    writeln!(self.output, "Circuit is empty.")?;
                } else {
                    write!(self.output, "{}", circuit)?;
                }
            }
            MenuChoice::ClearCircuit => {
                circuit.clear();
                writeln!(self.output, "Circuit cleared.")?;
            }
            MenuChoice::Sample => {
                let state = circuit.run();
                let shots = self.config.shots;
                writeln!(self.output, "\nMeasurement counts over {} shots:", shots)?;
                for (label, count) in counts(&state, shots, &mut self.rng) {
                    writeln!(self.output, "|{}⟩: {}", label, count)?;
                }
            }
            MenuChoice::Exit => return Ok(false),
            _ => unreachable!("single-qubit entries handled above"),
        }
        Ok(true)
    }

    fn push_gate(&mut self, circuit: &mut Circuit, gate: Gate) -> io::Result<()> {
        match circuit.add_gate(gate) {
            Ok(()) => writeln!(self.output, "Added {}.", gate),
            Err(err) => writeln!(self.output, "Could not add gate: {}", err),
        }
    }

    fn prompt_qubit_count(&mut self) -> io::Result<Option<usize>> {
        let max = self.config.max_qubits;
        loop {
            write!(
                self.output,
                "\nEnter number of qubits (1 to {} recommended): ",
                max
            )?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
                Ok(_) => writeln!(
                    self.output,
                    "Please enter a valid number between 1 and {}.",
                    max
                )?,
                Err(_) => writeln!(self.output, "Invalid input. Please enter a numeric value.")?,
            }
        }
    }

    fn prompt_index(&mut self, role: &str, num_qubits: usize) -> io::Result<Option<usize>> {
        loop {
            write!(
                self.output,
                "Enter {} qubit index (0 to {}): ",
                role,
                num_qubits - 1
            )?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(loc) if loc < num_qubits => return Ok(Some(loc)),
                Ok(_) => writeln!(self.output, "Index out of range.")?,
                Err(_) => writeln!(self.output, "Invalid input. Please enter an integer.")?,
            }
        }
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

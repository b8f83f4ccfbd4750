// src/circuits/mod.rs

//! Ordered operator sequences over a fixed-width qubit register.
//!
//! A [`Circuit`] is what the walk engine hands to a simulation backend. The
//! order of its operations is significant and is never rearranged.

use crate::core::QubitId;
use crate::operations::Operation;
use std::fmt;

/// An ordered sequence of operations on `num_qubits` qubits, optionally
/// terminated by a measurement of the whole register.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    /// Width of the register; qubits are `0..num_qubits`.
    num_qubits: usize,
    /// Operations in program order.
    operations: Vec<Operation>,
    /// Whether every qubit is measured after the last operation.
    measured: bool,
}

impl Circuit {
    /// Creates an empty, unmeasured circuit over `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            operations: Vec::new(),
            measured: false,
        }
    }

    /// Appends one operation.
    ///
    /// Qubit indices are not checked here; a backend rejects circuits that
    /// reference qubits outside the register.
    pub fn add_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Appends every operation yielded by `ops`, in order.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.extend(ops);
    }

    /// Marks the whole register for measurement once all operations have run.
    pub fn measure_all(&mut self) {
        self.measured = true;
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The operator sequence, in program order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of primitive operations. The final measurement is not counted.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of two-qubit operations in the sequence.
    pub fn controlled_count(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| matches!(op, Operation::ControlledFlip { .. }))
            .count()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining construction of a [`Circuit`].
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Applies a superposition to every qubit of the register.
    pub fn superpose_all(self) -> Self {
        let n = self.circuit.num_qubits;
        self.add_ops((0..n).map(|q| Operation::Superposition { target: QubitId(q) }))
    }

    pub fn measure_all(mut self) -> Self {
        self.circuit.measure_all();
        self
    }

    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GATE_WIDTH: usize = 5;
        const H_WIRE: char = '─';
        const V_WIRE: char = '│';

        writeln!(
            f,
            "Circuit[{} operations on {} qubits{}]",
            self.operations.len(),
            self.num_qubits,
            if self.measured { ", measured" } else { "" }
        )?;
        if self.num_qubits == 0 {
            return Ok(());
        }

        fn format_gate(symbol: &str) -> String {
            let len = symbol.chars().count();
            let dashes = GATE_WIDTH.saturating_sub(len);
            let pre = dashes / 2;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre),
                symbol,
                H_WIRE.to_string().repeat(dashes - pre)
            )
        }

        let columns = self.operations.len() + usize::from(self.measured);
        let wire = H_WIRE.to_string().repeat(GATE_WIDTH);
        let mut grid = vec![vec![wire; columns]; self.num_qubits];
        // connectors[r][t] sits between row r and row r + 1
        let mut connectors = vec![vec![' '; columns]; self.num_qubits];

        for (t, op) in self.operations.iter().enumerate() {
            match op {
                Operation::Superposition { target } | Operation::Coin { target, .. } => {
                    if let Some(row) = grid.get_mut(target.index()) {
                        row[t] = format_gate(op.label());
                    }
                }
                Operation::ControlledFlip { control, target } => {
                    let (c, x) = (control.index(), target.index());
                    if c < self.num_qubits && x < self.num_qubits {
                        grid[c][t] = format_gate("@");
                        grid[x][t] = format_gate(op.label());
                        for row in connectors.iter_mut().take(c.max(x)).skip(c.min(x)) {
                            row[t] = V_WIRE;
                        }
                    }
                }
            }
        }
        if self.measured {
            for row in grid.iter_mut() {
                row[columns - 1] = format_gate("M");
            }
        }

        let label_width = format!("{}", QubitId(self.num_qubits - 1)).len() + 2;
        for (r, row) in grid.iter().enumerate() {
            let label = format!("{}: ", QubitId(r));
            writeln!(f, "{:<width$}{}", label, row.join(""), width = label_width)?;
            if r + 1 < self.num_qubits {
                write!(f, "{}", " ".repeat(label_width))?;
                for connector in &connectors[r] {
                    let pad = GATE_WIDTH - 1;
                    write!(f, "{}{}{}", " ".repeat(pad / 2), connector, " ".repeat(pad - pad / 2))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

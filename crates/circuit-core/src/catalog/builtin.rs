//! Built-in initial verification flow for a single final circuit.

use crate::models::{TestCategory, TestStep};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_lines)]
pub(super) fn steps() -> Vec<TestStep> {
    vec![
        TestStep {
            id: "safe-isolation".to_string(),
            title: "Safe Isolation".to_string(),
            description: "Prove the circuit dead using the seven-point safe isolation procedure \
                          before any dead testing begins."
                .to_string(),
            category: TestCategory::SafeIsolation,
            test_type: "procedure".to_string(),
            instructions: lines(&[
                "Identify the circuit and point of isolation",
                "Switch off and disconnect the supply",
                "Secure the isolation (lock off/tag out)",
                "Test the voltage indicator on a known supply",
                "Test that the circuit is dead",
                "Re-test the voltage indicator on a known supply",
                "Begin work only when all points are satisfied",
            ]),
            safety_warnings: lines(&[
                "Never assume a circuit is dead until it has been proved dead",
                "Use GS38-compliant test leads and probes",
                "Apply a unique personal lock; never share keys",
            ]),
            required_equipment: lines(&[
                "Approved two-pole voltage indicator",
                "Proving unit",
                "Lock-off kit and warning notices",
            ]),
            estimated_time: Some("10-15 minutes".to_string()),
        },
        TestStep {
            id: "continuity".to_string(),
            title: "Continuity of Protective Conductors".to_string(),
            description: "Verify continuity of circuit protective conductors and, for ring \
                          final circuits, of each ring conductor."
                .to_string(),
            category: TestCategory::Continuity,
            test_type: "dead".to_string(),
            instructions: lines(&[
                "Null the test leads on the low-resistance ohmmeter",
                "Link line and CPC at the distribution board",
                "Measure R1+R2 at each point on the circuit",
                "Record the highest reading as R1+R2 for the circuit",
                "Remove the temporary link",
            ]),
            safety_warnings: lines(&["Confirm isolation is still secured before connecting leads"]),
            required_equipment: lines(&["Low-resistance ohmmeter", "Wander lead", "Shorting link"]),
            estimated_time: Some("15-30 minutes".to_string()),
        },
        TestStep {
            id: "insulation-resistance".to_string(),
            title: "Insulation Resistance".to_string(),
            description: "Measure insulation resistance between live conductors and between \
                          live conductors and earth."
                .to_string(),
            category: TestCategory::InsulationResistance,
            test_type: "dead".to_string(),
            instructions: lines(&[
                "Disconnect or isolate equipment sensitive to the test voltage",
                "Select 500 V DC for circuits up to 500 V",
                "Test line to neutral",
                "Test line and neutral connected together to earth",
                "Confirm each reading is at least 1 MΩ",
                "Reconnect any disconnected equipment",
            ]),
            safety_warnings: lines(&[
                "The test voltage can give an electric shock; keep clear of conductors under test",
                "Surge protective devices and electronic equipment can be damaged by the test",
            ]),
            required_equipment: lines(&["Insulation resistance tester"]),
            estimated_time: Some("10-20 minutes".to_string()),
        },
        TestStep {
            id: "polarity".to_string(),
            title: "Polarity".to_string(),
            description: "Confirm that single-pole devices are in the line conductor and that \
                          accessories are correctly connected."
                .to_string(),
            category: TestCategory::Polarity,
            test_type: "dead".to_string(),
            instructions: lines(&[
                "Link line and CPC at the distribution board",
                "Test between line and CPC at each accessory",
                "Operate switches to confirm they break the line conductor",
                "Check centre-contact lampholders have line on the centre contact",
            ]),
            safety_warnings: vec![],
            required_equipment: lines(&["Low-resistance ohmmeter", "Shorting link"]),
            estimated_time: Some("10 minutes".to_string()),
        },
        TestStep {
            id: "earth-fault-loop".to_string(),
            title: "Earth Fault Loop Impedance".to_string(),
            description: "Measure Zs at the furthest point of the circuit and compare with the \
                          maximum permitted for the protective device."
                .to_string(),
            category: TestCategory::EarthFaultLoop,
            test_type: "live".to_string(),
            instructions: lines(&[
                "Remove locks and re-energise the circuit once dead tests are satisfactory",
                "Measure Zs at the furthest point of the circuit",
                "Apply the 0.8 rule of thumb for conductor temperature",
                "Compare against the maximum Zs for the protective device",
            ]),
            safety_warnings: lines(&[
                "Live testing: use fused GS38 leads and keep fingers behind the barriers",
                "Use a no-trip loop test on RCD-protected circuits",
            ]),
            required_equipment: lines(&["Earth fault loop impedance tester"]),
            estimated_time: Some("5-10 minutes".to_string()),
        },
        TestStep {
            id: "rcd-test".to_string(),
            title: "RCD Operation".to_string(),
            description: "Confirm the RCD trips within the required time at its rated residual \
                          operating current."
                .to_string(),
            category: TestCategory::RcdTest,
            test_type: "live".to_string(),
            instructions: lines(&[
                "Warn occupants that the supply will be interrupted",
                "Test at 1 x IΔn on both 0° and 180° half-cycles",
                "Confirm a 30 mA RCD trips within 300 ms",
                "Test at 5 x IΔn where the RCD provides additional protection (40 ms)",
                "Operate the integral test button",
            ]),
            safety_warnings: lines(&[
                "Disconnect loads that could be damaged by loss of supply",
            ]),
            required_equipment: lines(&["RCD tester"]),
            estimated_time: Some("5 minutes".to_string()),
        },
        TestStep {
            id: "functional-test".to_string(),
            title: "Functional Testing".to_string(),
            description: "Operate switchgear, controls and interlocks to confirm they are \
                          mounted, adjusted and installed correctly."
                .to_string(),
            category: TestCategory::FunctionalTest,
            test_type: "live".to_string(),
            instructions: lines(&[
                "Operate every switch, isolator and control on the circuit",
                "Check interlocks and emergency stops function",
                "Confirm AFDDs and SPDs show a healthy status where fitted",
            ]),
            safety_warnings: vec![],
            required_equipment: vec![],
            estimated_time: Some("5-10 minutes".to_string()),
        },
    ]
}

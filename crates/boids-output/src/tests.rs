//! Integration tests for boids-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, SUMMARY_FILE};
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            tick,
            agent_id,
            x:  agent_id as f32 * 10.0,
            y:  1.5,
            vx: -0.25,
            vy: 3.0,
        }
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SNAPSHOT_FILE).exists());
        assert!(dir.path().join(SUMMARY_FILE).exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("first");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(SNAPSHOT_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "agent_id", "x", "y", "vx", "vy"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "neighbor_pairs", "rejected_inserts", "mean_speed"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join(SNAPSHOT_FILE));
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5"); // tick
        assert_eq!(&rows[0][1], "0"); // agent_id
        assert_eq!(&rows[2][1], "2");
        assert_eq!(rows[2][2].parse::<f32>().unwrap(), 20.0);
        assert_eq!(rows[1][4].parse::<f32>().unwrap(), -0.25);
        assert_eq!(rows[1][5].parse::<f32>().unwrap(), 3.0);
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:             3,
            neighbor_pairs:   12,
            rejected_inserts: 1,
            mean_speed:       4.0,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join(SUMMARY_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "12");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(rows[0][3].parse::<f32>().unwrap(), 4.0);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use boids_sim::{SimBuilder, SimConfig};
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, SUMMARY_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
        SimConfig {
            world_width: 200,
            world_height: 200,
            population: 3,
            seed: 1,
            total_ticks,
            output_interval_ticks,
            ..SimConfig::default()
        }
    }

    /// Fails every summary write; counts calls.
    #[derive(Default)]
    struct BrokenWriter {
        summary_calls: usize,
        finished:      bool,
    }

    impl OutputWriter for BrokenWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.summary_calls += 1;
            Err(OutputError::Io(io::Error::other(format!("disk full #{}", self.summary_calls))))
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config(6, 2)).build().unwrap();

        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 3 agents = 9 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 9 snapshot rows, got {}", rows.len());
        let ticks: Vec<&str> = rows.iter().map(|r| r.get(0).unwrap()).collect();
        assert_eq!(ticks, ["0", "0", "0", "2", "2", "2", "4", "4", "4"]);

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 6);
    }

    #[test]
    fn snapshot_matches_sim_state() {
        let mut sim = SimBuilder::new(config(1, 1)).build().unwrap();
        let dir = TempDir::new().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        for (row, boid) in rows.iter().zip(sim.boids()) {
            assert_eq!(row[2].parse::<f32>().unwrap(), boid.position.x);
            assert_eq!(row[3].parse::<f32>().unwrap(), boid.position.y);
            assert_eq!(row[4].parse::<f32>().unwrap(), boid.velocity.x);
            assert_eq!(row[5].parse::<f32>().unwrap(), boid.velocity.y);
        }
    }

    #[test]
    fn first_error_kept_and_run_continues() {
        let mut sim = SimBuilder::new(config(4, 0)).build().unwrap();
        let mut obs = SimOutputObserver::new(BrokenWriter::default());
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("disk full #1"), "{err}");
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.summary_calls, 4);
        assert!(writer.finished);
    }

    #[test]
    fn run_ticks_needs_explicit_finish() {
        let mut sim = SimBuilder::new(config(10, 1)).build().unwrap();
        let mut obs = SimOutputObserver::new(BrokenWriter::default());
        sim.run_ticks(2, &mut obs).unwrap();
        assert!(!obs.into_writer().finished);

        let mut obs = SimOutputObserver::new(BrokenWriter::default());
        sim.run_ticks(1, &mut obs).unwrap();
        obs.finish().unwrap();
        assert!(obs.into_writer().finished);
    }
}

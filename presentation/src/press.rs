//! The press: prints an edition with entrance animations
//!
//! The AQI counter is redrawn in place with a carriage return, pollutant
//! rows and risk articles appear one after another with a fixed stagger.

use crate::output::newspaper::NewspaperFormatter;
use breath_domain::{PredictionReport, Stagger, Typewriter};
use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::sleep;
use tracing::trace;

/// Time between two counter frames
const FRAME: Duration = Duration::from_millis(40);

/// Pause before the scale indicator slides in
const SCALE_DELAY: Duration = Duration::from_millis(100);

/// Prints editions to a writer, optionally animated
pub struct Press<W: Write> {
    out: W,
    animate: bool,
}

impl<W: Write> Press<W> {
    pub fn new(out: W) -> Self {
        Self { out, animate: true }
    }

    /// Set whether entrance animations play
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the whole edition
    pub async fn print_edition(
        &mut self,
        report: &PredictionReport,
        issued_at: NaiveDateTime,
    ) -> io::Result<()> {
        if !self.animate {
            write!(self.out, "{}", NewspaperFormatter::format(report, issued_at))?;
            return self.out.flush();
        }

        let info = report.aqi_info();

        self.write_section(&NewspaperFormatter::masthead(issued_at.date()))?;
        writeln!(self.out)?;

        let counter = Typewriter::aqi(report.aqi);
        let frames = counter.frames(FRAME);
        trace!("Counting AQI up in {} frames", frames.len());
        for (i, value) in frames.iter().enumerate() {
            if i > 0 {
                sleep(FRAME).await;
            }
            write!(
                self.out,
                "\r{}",
                NewspaperFormatter::aqi_headline(*value, info.band)
            )?;
            self.out.flush()?;
        }
        writeln!(self.out)?;

        self.write_section(&NewspaperFormatter::category(&info))?;
        sleep(SCALE_DELAY).await;
        self.write_section(&NewspaperFormatter::scale(&info))?;

        self.write_section(&NewspaperFormatter::section_header("POLLUTANT READINGS"))?;
        let stagger = Stagger::pollutants();
        for (i, (pollutant, value)) in report.pollutants.readings().enumerate() {
            if i > 0 {
                sleep(stagger.step()).await;
            }
            self.write_section(&NewspaperFormatter::pollutant_row(pollutant, value))?;
        }

        self.write_section(&NewspaperFormatter::section_header("WEATHER"))?;
        self.write_section(&NewspaperFormatter::weather(&report.weather))?;

        self.write_section(&NewspaperFormatter::section_header("HEALTH RISKS"))?;
        if report.health_risks.is_empty() {
            self.write_section(&NewspaperFormatter::no_risks())?;
        }
        let stagger = Stagger::risks();
        for (i, (symptom, risk)) in report.health_risks.iter().enumerate() {
            if i > 0 {
                sleep(stagger.step()).await;
            }
            self.write_section(&NewspaperFormatter::risk_article(symptom, risk))?;
        }

        self.write_section(&NewspaperFormatter::section_header("RECOMMENDATIONS"))?;
        self.write_section(&NewspaperFormatter::recommendations(&report.recommendations))?;
        self.write_section(&NewspaperFormatter::footer(issued_at.time()))
    }

    fn write_section(&mut self, section: &str) -> io::Result<()> {
        write!(self.out, "{}", section)?;
        self.out.flush()
    }
}

//! Interactive session: apply commands to the form and re-render

use goldcalc_common::{GoldcalcError, Result, CURRENCY};
use goldcalc_form::{Field, GoldForm};
use goldcalc_pricing::PricingService;
use serde_json::json;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::command::Command;
use crate::config::OutputFormat;

/// Whether the session keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct Session {
    form: GoldForm,
    service: Arc<PricingService>,
    output: OutputFormat,
}

impl Session {
    pub fn new(form: GoldForm, service: Arc<PricingService>, output: OutputFormat) -> Self {
        Self {
            form,
            service,
            output,
        }
    }

    pub fn form(&self) -> &GoldForm {
        &self.form
    }

    /// Read commands line by line until `quit` or end of input
    ///
    /// Lines that are not valid UTF-8 are reported on `err` and skipped.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        self.render(out)?;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!(%e, "Ignoring non UTF-8 input line");
                    writeln!(err, "ignoring input line: {}", e)?;
                    continue;
                }
            };
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, out, err)? == Flow::Stop {
                        break;
                    }
                }
                Err(e) => {
                    warn!(%e, "Ignoring input line");
                    writeln!(err, "{}", GoldcalcError::from(e))?;
                }
            }
        }
        Ok(())
    }

    /// Apply `field=value` arguments, then render once
    pub fn run_args<W, E>(&mut self, args: &[String], out: &mut W, err: &mut E) -> Result<()>
    where
        W: Write,
        E: Write,
    {
        for arg in args {
            match arg.parse::<Command>() {
                Ok(Command::Edit(field, text)) => self.apply_edit(field, &text, err)?,
                Ok(Command::Clear(field)) => self.form.clear(field),
                Ok(_) => writeln!(err, "ignoring '{}': expected field=value", arg)?,
                Err(e) => writeln!(err, "{}", GoldcalcError::from(e))?,
            }
        }
        self.render(out)
    }

    /// Execute one command
    pub fn execute<W, E>(&mut self, command: Command, out: &mut W, err: &mut E) -> Result<Flow>
    where
        W: Write,
        E: Write,
    {
        debug!(?command, "Executing");
        match command {
            Command::Edit(field, text) => {
                self.apply_edit(field, &text, err)?;
                self.render(out)?;
            }
            Command::Clear(field) => {
                self.form.clear(field);
                self.render(out)?;
            }
            Command::Show => self.render(out)?,
            Command::Json => self.write_json(out)?,
            Command::Fields => {
                for field in Field::ALL {
                    writeln!(
                        out,
                        "{:<22} {} = {:?}",
                        field.name(),
                        field.label(),
                        self.form.text().get(field)
                    )?;
                }
            }
            Command::Stats => match self.service.cache_stats() {
                Some(stats) => writeln!(
                    out,
                    "cache: {}/{} entries, {} hits, {} misses",
                    stats.entry_count,
                    self.service.config().cache_max_entries,
                    stats.hits,
                    stats.misses
                )?,
                None => writeln!(out, "cache: disabled")?,
            },
            Command::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    fn apply_edit<E: Write>(&mut self, field: Field, text: &str, err: &mut E) -> Result<()> {
        if let Err(e) = self.form.edit(field, text) {
            warn!(%e, "Edit rejected");
            writeln!(err, "{}", GoldcalcError::from(e))?;
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.output {
            OutputFormat::Text => write!(out, "{}", self.form.receipt())?,
            OutputFormat::Json => self.write_json(out)?,
        }
        out.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let snapshot = self.form.snapshot();
        let result = self.form.result();
        // Reason there is no result
        let reason = match result {
            Some(_) => None,
            None => self
                .service
                .evaluate(&snapshot)
                .err()
                .map(|e| GoldcalcError::from(e).to_string()),
        };
        let document = json!({
            "currency": CURRENCY,
            "inputs": snapshot,
            "result": result,
            "reason": reason,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(output: OutputFormat) -> Session {
        let service = Arc::new(PricingService::default());
        let form = GoldForm::new(Arc::clone(&service));
        Session::new(form, service, output)
    }

    fn run(session: &mut Session, script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        session
            .run(Cursor::new(script.to_string()), &mut out, &mut err)
            .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_prompt_then_receipt() {
        let mut session = session(OutputFormat::Text);
        let (out, err) = run(&mut session, "price 1000000\nweight 1\nfee 10\nquit\nweight 2\n");

        assert!(err.is_empty());
        assert!(out.starts_with(goldcalc_form::PROMPT));
        assert!(out.trim_end().ends_with("قیمت نهایی: ۱٬۱۹۴٬۷۰۰ تومان"));
        // Input after quit is not applied
        assert_eq!(session.form().text().get(Field::Weight), "1");
    }

    #[test]
    fn test_rejected_edit_reported() {
        let mut session = session(OutputFormat::Text);
        let (_, err) = run(&mut session, "weight 1.2.3\nkarat 18\n");

        assert!(err.contains("1.2.3"));
        assert!(err.contains("karat"));
        assert_eq!(session.form().text().get(Field::Weight), "");
    }

    #[test]
    fn test_invalid_utf8_line_skipped() {
        let mut session = session(OutputFormat::Text);
        let mut script = b"price 1000\n".to_vec();
        script.extend_from_slice(&[0xff, 0xfe, b'\n']);
        script.extend_from_slice(b"weight 1\n");

        let mut out = Vec::new();
        let mut err = Vec::new();
        session.run(Cursor::new(script), &mut out, &mut err).unwrap();

        assert!(String::from_utf8(err).unwrap().contains("ignoring input line"));
        assert_eq!(session.form().text().get(Field::Weight), "1");
        assert!(session.form().result().is_some());
    }

    #[test]
    fn test_json_output() {
        let mut session = session(OutputFormat::Json);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let args = vec!["price=500000".to_string(), "weight=2".to_string()];
        session.run_args(&args, &mut out, &mut err).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["currency"], "Toman");
        assert_eq!(value["inputs"]["gold_price_per_gram"], "500000");
        assert!(value["result"]["final_price"].is_string());
    }

    #[test]
    fn test_json_null_when_not_ready() {
        let mut session = session(OutputFormat::Text);
        let (out, _) = run(&mut session, "json\n");
        assert!(out.contains("\"result\": null"));
        assert!(out.contains("Gold price per gram must be positive"));
    }

    #[test]
    fn test_json_reports_overflow() {
        let mut session = session(OutputFormat::Json);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let args = vec![
            "price=1000000000000000000".to_string(),
            "weight=1000000000000".to_string(),
        ];
        session.run_args(&args, &mut out, &mut err).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["result"].is_null());
        assert_eq!(value["reason"], "Pricing error: Pricing calculation overflow");
    }

    #[test]
    fn test_stats_and_fields() {
        let mut session = session(OutputFormat::Text);
        let (out, _) = run(&mut session, "price 1000\nweight 1\nshow\nstats\nfields\n");

        assert!(out.contains("/1024 entries"));
        assert!(out.contains("hits"));
        assert!(out.contains("vat_percent"));
        assert!(out.contains("\"۱٬۰۰۰\""));
    }
}

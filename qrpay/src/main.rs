use clap::{Parser, ValueEnum};
use qrpaylib::{
    error::{QrPayError, Result},
    formats::{epc::EpcQr, upn::UpnQr},
    model::EpcQrData,
    traits::{ReadFormat, WriteFormat},
    validate::ValidRecord,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// UPN QR -> текст EPC QR
    Convert,
    /// Разобранный UPN QR в JSON
    Decode,
    /// Только проверка
    Validate,
    /// Поля EPC QR с подписями
    Describe,
}

#[derive(Parser, Debug)]
#[command(name = "qrpay", version, about = "Конвертация UPN QR в EPC QR")]
struct Cli {
    /// Входной файл (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Режим работы
    #[arg(long = "mode", value_enum, default_value_t = Mode::Convert)]
    mode: Mode,

    /// Уровень логов (иначе RUST_LOG, иначе warn)
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn init_tracing(level: Option<&str>) {
    let filter = level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    let w: Box<dyn Write> = match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(w)
}

fn run(cli: Cli) -> Result<()> {
    // reader
    let reader: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let rec = UpnQr::read(BufReader::new(reader))?;
    info!(format = %rec.format, "UPN QR decoded");

    // выходной файл открываем только когда есть что писать
    let mut writer = match cli.mode {
        Mode::Validate => {
            ValidRecord::new(rec)?;
            debug!("record is valid");
            return Ok(());
        }
        Mode::Decode => {
            let mut w = open_output(cli.output.as_deref())?;
            serde_json::to_writer_pretty(&mut w, &rec).map_err(io::Error::from)?;
            writeln!(w)?;
            w
        }
        Mode::Convert => {
            let epc = EpcQrData::from(&ValidRecord::new(rec)?);
            let mut w = open_output(cli.output.as_deref())?;
            // payload уже оканчивается на \n (пустое поле info)
            EpcQr::write(&mut w, &epc)?;
            w
        }
        Mode::Describe => {
            let epc = EpcQrData::from(&ValidRecord::new(rec)?);
            let mut w = open_output(cli.output.as_deref())?;
            for (label, value) in epc.fields() {
                writeln!(w, "{label}: {value}")?;
            }
            w
        }
    };

    writer.flush().map_err(QrPayError::from)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(QrPayError::Validation(e)) => {
            eprintln!("error: validation failed");
            for m in &e.messages {
                eprintln!("  - {m}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

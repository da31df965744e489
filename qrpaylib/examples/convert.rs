use qrpaylib::{
    formats::{epc::EpcQr, upn::UpnQr},
    model::EpcQrData,
    traits::{ReadFormat, WriteFormat},
    validate::ValidRecord,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: UPN QR из stdin -> EPC QR в stdout
    let rec = UpnQr::read(std::io::BufReader::new(std::io::stdin()))?;
    let valid = ValidRecord::new(rec)?;
    EpcQr::write(std::io::stdout(), &EpcQrData::from(&valid))?;
    Ok(())
}

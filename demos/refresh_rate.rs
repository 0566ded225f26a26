use vsync_rate::{Error, RefreshRateResolver};

fn main() -> vsync_rate::Result<()> {
    let resolver = RefreshRateResolver::native();

    for index in 0.. {
        match resolver.resolve(index) {
            Ok(hz) => println!("Monitor {index}: {hz:.3} Hz"),
            Err(Error::MonitorNotFound(_)) => break,
            Err(Error::NotSupported(reason)) => {
                println!("Not supported: {reason}");
                break;
            }
            Err(e) => println!("Monitor {index}: {e}"),
        }
    }

    Ok(())
}

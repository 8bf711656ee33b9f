use profig_logs::Metric;
use profig_stats::{ScalingRow, ShareRow};

/// Mirrors the chart contents on stdout so a run leaves a greppable record
/// next to the figure.
pub fn print_share_table(rows: &[ShareRow]) {
    println!("version      |     wrap |     step |     swap |      gif");
    println!("-------------+----------+----------+----------+---------");
    for row in rows {
        println!(
            "{:<12} | {:>8.3} | {:>8.3} | {:>8.3} | {:>8.3}",
            row.label, row.shares[0], row.shares[1], row.shares[2], row.shares[3]
        );
    }
}

pub fn print_scaling_table(rows: &[ScalingRow]) {
    println!(
        "threads | runs |    init |    wrap |    step |    swap |     gif |   final |   total | throughput"
    );
    println!(
        "--------+------+---------+---------+---------+---------+---------+---------+---------+-----------"
    );
    for row in rows {
        let mean = |metric: Metric| row.metric(metric).mean;
        println!(
            "{:<7} | {:>4} | {:>7.3} | {:>7.3} | {:>7.3} | {:>7.3} | {:>7.3} | {:>7.3} | {:>7.3} | {:>10.0}",
            row.label,
            row.runs,
            mean(Metric::Init),
            mean(Metric::Wrap),
            mean(Metric::Step),
            mean(Metric::Swap),
            mean(Metric::Gif),
            mean(Metric::Final),
            mean(Metric::Total),
            mean(Metric::Throughput),
        );
    }
}

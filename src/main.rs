// ==========================================
// 钛合金3D打印成本预算系统 - 命令行入口
// ==========================================
// 定位: 核心库的参考调用方（界面外壳的替身）
// 用法: ti-print-budget <零件清单.xlsx|.xlsm|.csv> <打印时长>
//       [--profile 定价.json] [--export 报表.xlsx] [--txt 报表.txt]
// ==========================================

use std::path::PathBuf;
use std::process::ExitCode;

use ti_print_budget::api::BudgetApi;
use ti_print_budget::config::{default_profile_path, load_profile};
use ti_print_budget::{i18n, logging};

fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", ti_print_budget::APP_NAME);
    tracing::info!("系统版本: {}", ti_print_budget::VERSION);
    tracing::info!("==================================================");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = CliArgs::parse(&args)?;

    let api = BudgetApi::new();

    // 定价方案: --profile 指定 > 用户配置目录 > 内置默认
    let profile_path = cli.profile.unwrap_or_else(default_profile_path);
    let profile = load_profile(&profile_path)
        .map_err(|e| format!("定价方案读取失败: {}", e))?
        .unwrap_or_default();
    let pricing = profile.to_pricing_config();

    // 加载零件清单
    let parts = api.load_parts(&cli.parts_file).map_err(|e| e.to_string())?;
    println!(
        "{}",
        i18n::t_with_args("app.parts_loaded", &[("count", &parts.len().to_string())])
    );

    // 计算并渲染报表
    let breakdown = api
        .estimate(&parts, &cli.duration, &pricing)
        .map_err(|e| e.to_string())?;
    println!("{}", api.render_report(&breakdown));

    // 可选导出
    if let Some(path) = cli.export_xlsx {
        api.export_excel(&breakdown, &path)
            .map_err(|e| e.to_string())?;
        println!(
            "{}",
            i18n::t_with_args("app.report_saved", &[("path", &path.display().to_string())])
        );
    }
    if let Some(path) = cli.export_txt {
        api.export_text(&breakdown, &path)
            .map_err(|e| e.to_string())?;
        println!(
            "{}",
            i18n::t_with_args("app.report_saved", &[("path", &path.display().to_string())])
        );
    }

    Ok(())
}

const USAGE: &str = "用法: ti-print-budget <零件清单.xlsx|.xlsm|.csv> <打印时长> \
[--profile 定价.json] [--export 报表.xlsx] [--txt 报表.txt]";

struct CliArgs {
    parts_file: PathBuf,
    duration: String,
    profile: Option<PathBuf>,
    export_xlsx: Option<PathBuf>,
    export_txt: Option<PathBuf>,
}

impl CliArgs {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut positional: Vec<String> = Vec::new();
        let mut profile = None;
        let mut export_xlsx = None;
        let mut export_txt = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--profile" => {
                    profile = Some(PathBuf::from(
                        iter.next().ok_or_else(|| USAGE.to_string())?,
                    ));
                }
                "--export" => {
                    export_xlsx = Some(PathBuf::from(
                        iter.next().ok_or_else(|| USAGE.to_string())?,
                    ));
                }
                "--txt" => {
                    export_txt = Some(PathBuf::from(
                        iter.next().ok_or_else(|| USAGE.to_string())?,
                    ));
                }
                other => positional.push(other.to_string()),
            }
        }

        if positional.len() != 2 {
            return Err(USAGE.to_string());
        }

        Ok(Self {
            parts_file: PathBuf::from(&positional[0]),
            duration: positional[1].clone(),
            profile,
            export_xlsx,
            export_txt,
        })
    }
}

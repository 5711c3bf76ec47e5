use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

use payslip::config::{
    data_dir, load_config, resolve_slip_dir, save_config, RateField, CONFIG_TEMPLATE,
};
use payslip::employee::{
    render_details, render_pay_slip, slip_file_name, Directory, Employee, Identity,
};
use payslip::error::{PayslipError, Result};
use payslip::overtime::{Ledger, OVERTIME_RATE_PER_HOUR};
use payslip::store;

#[derive(Parser)]
#[command(name = "payslip")]
#[command(version, about = "Minimal CLI payroll and pay slip system", long_about = None)]
struct Cli {
    /// Path to data directory (default: ~/.payslip or XDG data dir)
    #[arg(short = 'C', long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with a template config
    Init,

    /// Add a permanent employee (salary computed from basic pay and current rates)
    AddPermanent {
        /// Employee number (uniqueness is not enforced)
        #[arg(short, long)]
        number: u32,

        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        department: String,

        #[arg(long)]
        designation: String,

        /// Monthly basic salary
        #[arg(long)]
        basic_salary: f64,

        /// Income tax deduction
        #[arg(long)]
        income_tax: f64,
    },

    /// Add a contractual employee (gross salary supplied directly)
    AddContractual {
        /// Employee number (uniqueness is not enforced)
        #[arg(short, long)]
        number: u32,

        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        department: String,

        #[arg(long)]
        designation: String,

        /// Monthly gross salary
        #[arg(long)]
        gross_salary: f64,

        /// Income tax deduction
        #[arg(long)]
        income_tax: f64,
    },

    /// Write the pay slip file for an employee
    Slip {
        /// Employee number
        number: u32,
    },

    /// Show all stored fields for an employee
    Show {
        /// Employee number
        number: u32,
    },

    /// List all employee records
    List,

    /// Change one salary rate (affects future records only)
    SetRate {
        /// Which rate to change
        field: RateField,

        /// New value (percentages for rates, amounts otherwise; unchecked)
        value: f64,
    },

    /// Show current rates and store counts
    Rates,

    /// Record overtime for an employee and save the ledger
    AddOvertime {
        /// Employee number (not checked against the directory)
        #[arg(short, long)]
        number: u32,

        #[arg(long)]
        name: String,

        /// Overtime hours worked
        #[arg(long)]
        hours: f64,
    },

    /// Display the overtime dues report
    Overtime,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let dir = match cli.data_dir {
        Some(p) => p,
        None => data_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&dir),
        Commands::AddPermanent {
            number,
            name,
            address,
            department,
            designation,
            basic_salary,
            income_tax,
        } => {
            let identity = Identity {
                number,
                name,
                address,
                department,
                designation,
            };
            cmd_add_permanent(&dir, identity, basic_salary, income_tax)
        }
        Commands::AddContractual {
            number,
            name,
            address,
            department,
            designation,
            gross_salary,
            income_tax,
        } => {
            let identity = Identity {
                number,
                name,
                address,
                department,
                designation,
            };
            cmd_add_contractual(&dir, identity, gross_salary, income_tax)
        }
        Commands::Slip { number } => cmd_slip(&dir, number),
        Commands::Show { number } => cmd_show(&dir, number),
        Commands::List => cmd_list(&dir),
        Commands::SetRate { field, value } => cmd_set_rate(&dir, field, value),
        Commands::Rates => cmd_rates(&dir),
        Commands::AddOvertime {
            number,
            name,
            hours,
        } => cmd_add_overtime(&dir, number, name, hours),
        Commands::Overtime => cmd_overtime(&dir),
    }
}

// Table row structs for tabled
#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "NUMBER")]
    number: u32,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DEPARTMENT")]
    department: String,
    #[tabled(rename = "DESIGNATION")]
    designation: String,
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "NET SALARY")]
    net_salary: String,
}

#[derive(Tabled)]
struct OvertimeRow {
    #[tabled(rename = "EMP NO")]
    number: u32,
    #[tabled(rename = "EMPLOYEE NAME")]
    name: String,
    #[tabled(rename = "HOURS")]
    hours: String,
    #[tabled(rename = "DUES")]
    dues: String,
}

fn ensure_data_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(PayslipError::DataDirNotFound(dir.to_path_buf()));
    }
    Ok(())
}

/// Initialize the data directory with template files
fn cmd_init(dir: &Path) -> Result<()> {
    if dir.exists() {
        return Err(PayslipError::AlreadyInitialized(dir.to_path_buf()));
    }

    fs::create_dir_all(dir)?;
    fs::create_dir_all(dir.join("payslips"))?;
    fs::write(dir.join("config.toml"), CONFIG_TEMPLATE)?;

    println!("Initialized payslip data directory at: {}", dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Adjust salary rates if needed:  $EDITOR {}/config.toml",
        dir.display()
    );
    println!("  2. Add your first employee:");
    println!("     payslip add-permanent --number 101 --name \"Jane Doe\" \\");
    println!("       --address \"4 Elm Street\" --department Engineering \\");
    println!("       --designation Engineer --basic-salary 50000 --income-tax 1000");
    println!("  3. Write the pay slip:  payslip slip 101");

    Ok(())
}

/// Add a permanent employee and persist the record
fn cmd_add_permanent(
    dir: &Path,
    identity: Identity,
    basic_salary: f64,
    income_tax: f64,
) -> Result<()> {
    ensure_data_dir(dir)?;

    let config = load_config(dir)?;
    let mut directory = Directory::default();
    let employee = directory.add(Employee::permanent(
        identity,
        basic_salary,
        income_tax,
        &config.rates,
    ));
    store::append_employee(dir, employee)?;

    print_added(employee);
    Ok(())
}

/// Add a contractual employee and persist the record
fn cmd_add_contractual(
    dir: &Path,
    identity: Identity,
    gross_salary: f64,
    income_tax: f64,
) -> Result<()> {
    ensure_data_dir(dir)?;

    let config = load_config(dir)?;
    let mut directory = Directory::default();
    let employee = directory.add(Employee::contractual(
        identity,
        gross_salary,
        income_tax,
        &config.rates,
    ));
    store::append_employee(dir, employee)?;

    print_added(employee);
    Ok(())
}

fn print_added(employee: &Employee) {
    println!(
        "Added {} employee {}",
        employee.variant_label().to_lowercase(),
        employee.number
    );
    println!("  Name:  {}", employee.name);
    println!("  Gross: {:.2}", employee.gross_salary());
    println!("  Net:   {:.2}", employee.net_salary());
}

/// Write the pay slip text file for one employee
fn cmd_slip(dir: &Path, number: u32) -> Result<()> {
    ensure_data_dir(dir)?;

    let config = load_config(dir)?;
    let directory = Directory::from_records(store::load_employees(dir)?);
    let employee = directory
        .find_by_number(number)
        .ok_or(PayslipError::EmployeeNotFound(number))?;

    let slip_dir = resolve_slip_dir(&config.output.slip_dir, dir);
    fs::create_dir_all(&slip_dir)?;

    let path = slip_dir.join(slip_file_name(number));
    fs::write(&path, render_pay_slip(employee))?;

    println!("Pay slip generated: {}", path.display());
    Ok(())
}

/// Show every stored field for one employee
fn cmd_show(dir: &Path, number: u32) -> Result<()> {
    ensure_data_dir(dir)?;

    let directory = Directory::from_records(store::load_employees(dir)?);
    let employee = directory
        .find_by_number(number)
        .ok_or(PayslipError::EmployeeNotFound(number))?;

    print!("{}", render_details(employee));
    Ok(())
}

/// List all employee records
fn cmd_list(dir: &Path) -> Result<()> {
    ensure_data_dir(dir)?;

    let directory = Directory::from_records(store::load_employees(dir)?);

    if directory.is_empty() {
        println!("No employee records yet.");
        println!("Add one with 'payslip add-permanent' or 'payslip add-contractual'.");
        return Ok(());
    }

    let rows: Vec<EmployeeRow> = directory
        .iter()
        .map(|e| EmployeeRow {
            number: e.number,
            name: e.name.clone(),
            department: e.department.clone(),
            designation: e.designation.clone(),
            kind: e.variant_label().to_string(),
            net_salary: format!("{:.2}", e.net_salary()),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    println!();
    println!("Total: {} employees", directory.len());

    Ok(())
}

/// Change one salary rate in config.toml
fn cmd_set_rate(dir: &Path, field: RateField, value: f64) -> Result<()> {
    ensure_data_dir(dir)?;

    let mut config = load_config(dir)?;
    config.rates.set(field, value);
    save_config(dir, &config)?;

    println!("Configuration updated.");
    println!("  DA rate:            {:.2}%", config.rates.da_rate);
    println!("  HRA rate:           {:.2}%", config.rates.hra_rate);
    println!("  Medical allowance:  {:.2}", config.rates.medical_allowance);
    println!("  Professional tax:   {:.2}", config.rates.professional_tax);
    println!("Existing records keep the rates they were created with.");

    Ok(())
}

/// Show current rates and store counts
fn cmd_rates(dir: &Path) -> Result<()> {
    ensure_data_dir(dir)?;

    let config = load_config(dir)?;
    let employees = store::load_employees(dir)?;
    let overtime = store::load_overtime(dir)?;

    println!("Payroll Rates");
    println!("{}", "-".repeat(50));
    println!("Data directory:     {}", dir.display());
    println!("DA rate:            {:.2}%", config.rates.da_rate);
    println!("HRA rate:           {:.2}%", config.rates.hra_rate);
    println!("Medical allowance:  {:.2}", config.rates.medical_allowance);
    println!("Professional tax:   {:.2}", config.rates.professional_tax);
    println!("Overtime rate:      {:.2}/hour", OVERTIME_RATE_PER_HOUR);
    println!("Employees:          {}", employees.len());
    println!("Overtime entries:   {}", overtime.len());

    Ok(())
}

/// Record one overtime entry and rewrite the ledger store
fn cmd_add_overtime(dir: &Path, number: u32, name: String, hours: f64) -> Result<()> {
    ensure_data_dir(dir)?;

    let mut ledger = Ledger::from_entries(store::load_overtime(dir)?);
    let dues = ledger.add_entry(number, name, hours);

    store::save_overtime(dir, ledger.entries())?;

    println!(
        "Overtime record added for employee {number}: {hours:.2} hours, dues {dues:.2}"
    );
    Ok(())
}

/// Display the overtime dues report
fn cmd_overtime(dir: &Path) -> Result<()> {
    ensure_data_dir(dir)?;

    let ledger = Ledger::from_entries(store::load_overtime(dir)?);

    if ledger.is_empty() {
        println!("No overtime records found.");
        return Ok(());
    }

    println!("Overtime Dues Report");

    let rows: Vec<OvertimeRow> = ledger
        .iter()
        .map(|e| OvertimeRow {
            number: e.number,
            name: e.name.clone(),
            hours: format!("{:.2}", e.hours),
            dues: format!("{:.2}", e.dues),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

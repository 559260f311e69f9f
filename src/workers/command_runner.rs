use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use solana_program::pubkey::Pubkey;
use crate::config::config_manager::ConfigManager;
use crate::enums::account_kind::AccountKind;
use crate::enums::commands::Commands;
use crate::enums::finding_severity::FindingSeverity;
use crate::enums::framework::Framework;
use crate::enums::output_format::OutputFormat;
use crate::enums::pattern_type::PatternType;
use crate::enums::pda_command::PdaCommand;
use crate::enums::programs_command::ProgramsCommand;
use crate::enums::skills_command::SkillsCommand;
use crate::errors::{ParityError, ParityResult, ResultExt};
use crate::services::account_decoder::AccountDecoder;
use crate::services::address_deriver::{parse_program_hash, parse_pubkey, program_hash, ProgramAddressDeriver};
use crate::services::parity_client::ParityClient;
use crate::services::report_formatter::ReportFormatter;
use crate::services::skill_parser::SkillParser;
use crate::services::skills_api::SkillsApi;
use crate::structs::analyze_options::AnalyzeOptions;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use crate::structs::context_query::ContextQuery;
use crate::structs::skill_chain::SkillChain;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    api_key: Option<String>,
    base_url: Option<String>,
}

impl CommandRunner {
    pub fn new(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            api_key: cli.api_key.clone(),
            base_url: cli.base_url.clone(),
        }
    }

    pub fn run_command(&self, command: Commands) -> ParityResult<()> {
        let start = Instant::now();

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { path, framework, skills, min_score, fail_on, output } => {
                self.analyze_command(path, framework, skills, min_score, fail_on, output)
            }
            Commands::Skills { action } => self.skills_command(action),
            Commands::SkillValidate { file } => self.skill_validate_command(&file),
            Commands::Context { pattern, framework, severity, pattern_type } => {
                self.context_command(pattern, framework, severity, pattern_type)
            }
            Commands::Programs { action } => self.programs_command(action),
            Commands::Health => self.health_command(),
            Commands::Pda { action } => self.pda_command(action),
            Commands::Decode { kind, file } => self.decode_command(kind, &file),
        };

        log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        result
    }

    fn load_config(&self) -> ParityResult<Config> {
        let mut config = match &self.config_path {
            Some(path) => ConfigManager::load_from(path)?,
            None => ConfigManager::load()?,
        };

        if let Some(api_key) = &self.api_key {
            config.api.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        Ok(config)
    }

    fn client(&self) -> ParityResult<ParityClient> {
        let config = self.load_config()?;
        ParityClient::new(config.api)
    }

    fn init_command(&self) -> ParityResult<()> {
        log::info!("🚀 Initializing parity configuration...");

        let path = match &self.config_path {
            Some(path) => {
                ConfigManager::create_sample_config_at(path)?;
                path.clone()
            }
            None => ConfigManager::create_sample_config()?,
        };

        log::info!("📝 Edit {} and set your API key.", path.display());
        log::info!("🔧 Run 'parity validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> ParityResult<()> {
        log::info!("🔍 Validating parity configuration...");
        let config = self.load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                log::error!("❌ Issues found:");
                for error in &errors {
                    log::error!("   - {}", error);
                }
                Err(ParityError::config_error(
                    &format!("{} configuration problems", errors.len()),
                    None,
                    Some("Run 'parity init' to see a sample configuration"),
                ))
            }
        }
    }

    fn analyze_command(
        &self,
        path: PathBuf,
        framework: Option<Framework>,
        skills: Vec<String>,
        min_score: Option<u8>,
        fail_on: Vec<FindingSeverity>,
        output: OutputFormat,
    ) -> ParityResult<()> {
        let mut client = self.client()?;
        let options = AnalyzeOptions {
            program: path,
            framework,
            skills: if skills.is_empty() { None } else { Some(skills) },
            min_score,
            fail_on,
        };

        let result = client.analyze(&options)?;
        println!("{}", ReportFormatter::render(&result, output)?);
        Ok(())
    }

    fn skills_command(&self, action: SkillsCommand) -> ParityResult<()> {
        match action {
            SkillsCommand::Chain { name } => {
                let chain = SkillChain { chain: SkillsApi::expand_chain(&name), skill: name };
                println!("{}", serde_json::to_string_pretty(&chain)?);
            }
            SkillsCommand::List => {
                let mut client = self.client()?;
                let skills = client.skills().list()?;
                for skill in &skills {
                    println!("{:<24} {:<8} {}", skill.name, skill.version, skill.description);
                }
                log::info!("📊 {} skills available", skills.len());
            }
            SkillsCommand::Get { name } => {
                let mut client = self.client()?;
                let skill = client.skills().get(&name)?;
                println!("{}", SkillParser::serialize(&skill)?);
            }
        }
        Ok(())
    }

    fn skill_validate_command(&self, file: &Path) -> ParityResult<()> {
        let content = fs::read_to_string(file).with_file_context(&file.display().to_string(), "read skill file")?;
        let result = SkillParser::validate(&content);
        result.print_summary();

        if result.is_valid {
            Ok(())
        } else {
            Err(ParityError::validation_error(
                "skill",
                &file.display().to_string(),
                &result.errors.join("; "),
                None,
            ))
        }
    }

    fn context_command(
        &self,
        pattern: Option<String>,
        framework: Option<Framework>,
        severity: Option<FindingSeverity>,
        pattern_type: Option<PatternType>,
    ) -> ParityResult<()> {
        let mut client = self.client()?;
        let query = ContextQuery { pattern, framework, severity, pattern_type };
        let result = client.context().get(&query)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }

    fn programs_command(&self, action: ProgramsCommand) -> ParityResult<()> {
        let client = self.client()?;
        let json = match action {
            ProgramsCommand::List { page, limit } => serde_json::to_string_pretty(&client.list_programs(page, limit)?)?,
            ProgramsCommand::Get { hash } => serde_json::to_string_pretty(&client.get_program(&hash)?)?,
            ProgramsCommand::Stats => serde_json::to_string_pretty(&client.registry_stats()?)?,
        };
        println!("{}", json);
        Ok(())
    }

    fn health_command(&self) -> ParityResult<()> {
        let client = self.client()?;
        let health = client.health_check()?;

        if health.is_healthy() {
            log::info!("✅ API {} is healthy (version {})", client.config().base_url, health.version);
        } else {
            log::warn!("⚠️ API {} reports status '{}'", client.config().base_url, health.status);
        }
        for (service, status) in &health.services {
            log::info!("   {}: {}", service, status);
        }
        Ok(())
    }

    fn pda_command(&self, action: PdaCommand) -> ParityResult<()> {
        let config = self.load_config()?;
        let deriver = ProgramAddressDeriver::from_program_id(&config.solana.program_id)?;

        let (address, bump) = match action {
            PdaCommand::Registry => deriver.registry_address()?,
            PdaCommand::Program { hash, file } => {
                let hash = match (hash, file) {
                    (Some(hash), _) => parse_program_hash(&hash)?,
                    (None, Some(file)) => {
                        let bytes = fs::read(&file).with_file_context(&file.display().to_string(), "read program")?;
                        program_hash(&bytes)
                    }
                    (None, None) => {
                        return Err(ParityError::validation_error("hash", "", "--hash or --file", None));
                    }
                };
                deriver.program_entry_address(&hash)?
            }
            PdaCommand::Analysis { program_entry, auditor } => {
                let program_entry = parse_pubkey("program_entry", &program_entry)?;
                let auditor = parse_pubkey("auditor", &auditor)?;
                deriver.analysis_address(&program_entry, &auditor)?
            }
            PdaCommand::Skill { name } => deriver.skill_address(&name)?,
            PdaCommand::Auditor { authority } => deriver.auditor_address(&parse_pubkey("authority", &authority)?)?,
            PdaCommand::Badge { program_entry } => {
                deriver.badge_address(&parse_pubkey("program_entry", &program_entry)?)?
            }
            PdaCommand::Pattern { id } => deriver.pattern_address(&id)?,
        };

        Self::print_address(deriver.program_id(), &address, bump);
        Ok(())
    }

    fn print_address(program_id: &Pubkey, address: &Pubkey, bump: u8) {
        log::debug!("🔑 Derived under program {}", program_id);
        println!("{} (bump {})", address, bump);
    }

    fn decode_command(&self, kind: AccountKind, file: &Path) -> ParityResult<()> {
        let data = fs::read(file).with_file_context(&file.display().to_string(), "read account data")?;

        let json = match kind {
            AccountKind::Program => serde_json::to_string_pretty(&AccountDecoder::program_entry(&data)?)?,
            AccountKind::Auditor => serde_json::to_string_pretty(&AccountDecoder::auditor(&data)?)?,
            AccountKind::Badge => serde_json::to_string_pretty(&AccountDecoder::badge(&data)?)?,
            AccountKind::Registry => serde_json::to_string_pretty(&AccountDecoder::registry_stats(&data)?)?,
        };
        println!("{}", json);
        Ok(())
    }
}

pub mod analyze_call_use_case;

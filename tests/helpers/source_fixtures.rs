//! Common Verilog sources for tests.

/// The single-line module from the extractor contract.
pub const SIMPLE_MODULE: &str =
    "module m(input a, output [7:0] b); sub u1(.a(a), .b(net1)); endmodule";

/// `top` → `mid` → `top`.
pub const DIRECT_CYCLE_TOP: &str = r#"
module top (input clk);
  mid u_mid (.clk(clk));
endmodule
"#;

pub const DIRECT_CYCLE_MID: &str = r#"
module mid (input clk);
  top u_top (.clk(clk));
endmodule
"#;

/// `a` → `b` → `c` → `d`, one file.
pub const CHAIN: &str = r#"
module a;
  b u_b ();
endmodule

module b;
  c u_c ();
endmodule

module c;
  d u_d ();
endmodule

module d;
endmodule
"#;

/// Two instances sharing `sysclk`, plus an unrelated one.
pub const SHARED_CLOCK: &str = r#"
module soc (input sysclk, input rst_n);
  wire [7:0] data;

  // producer
  producer u_prod (
    .clk   (sysclk),
    .rst_n (rst_n),
    .dout  (data[7:0])
  );

  consumer u_cons (
    .clock (sysclk),
    .din   (data [7:0]),
    .err   ()
  );

  monitor u_mon (.tick(slowclk));
endmodule
"#;

/// A second parent with an instance name reused from [`SHARED_CLOCK`].
pub const OTHER_PARENT: &str = r#"
module bridge (input sysclk);
  consumer u_prod (.clock(sysclk));
endmodule
"#;

pub const TOP_WITH_ALU: &str = r#"
module top;
  alu u_alu0 ();
  alu u_alu1 ();
endmodule
"#;

pub const ALU_FAST: &str = "module alu;\n  adder_fast u_add ();\nendmodule\n";
pub const ALU_SMALL: &str = "module alu;\n  adder_small u_add ();\nendmodule\n";

/// Variants selected by `USE_FAST`.
pub const CONDITIONAL_TOP: &str = r#"
module top;
`ifdef USE_FAST
  fast_core u_core (.clk(clk));
`else
  small_core u_core (.clk(clk));
`endif
endmodule
"#;

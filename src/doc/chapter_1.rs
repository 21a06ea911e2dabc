/*!
# Statements

Several statements can share a line when separated by `:`.
Only `THEN` is followed by another statement without a separator.
*/

pub mod BYE {
    /*!
    ## `BYE` Leaves the interpreter.
    */
}

pub mod CLEAR {
    /*!
    ## `CLEAR` Sets every variable to zero.
    */
}

pub mod CLS {
    /*!
    ## `CLS` Clears the screen.
    */
}

pub mod END {
    /*!
    ## `END` Ends the program and returns to the prompt.
    */
}

pub mod GOSUB {
    /*!
    ## `GOSUB <exp>` Calls a subroutine.
    Execution moves to the line the expression names. `RETURN` continues
    with the line after the one holding the `GOSUB`; anything following
    `GOSUB` on its own line is not executed. Calls nest 26 deep.
    ```text
    10 GOSUB 100
    20 END
    100 PRINT "IN THE SUBROUTINE"
    110 RETURN
    ```
    */
}

pub mod GOTO {
    /*!
    ## `GOTO <exp>` Continues execution at another line.
    The target is an expression so computed jumps work.
    `Line not found` is reported when no such line is stored.
    ```text
    10 INPUT N
    20 GOTO 100 + N * 10
    ```
    */
}

pub mod HELP {
    /*!
    ## `HELP` Prints a summary of the statements.
    */
}

pub mod IF {
    /*!
    ## `IF <exp> THEN <statement>`
    When the expression is zero the rest of the line is skipped.
    ```text
    10 IF A > 10 THEN PRINT "BIG" : GOTO 100
    ```
    */
}

pub mod INPUT {
    /*!
    ## `INPUT <var>` Reads a number from the keyboard.
    Prompts with `?`. An empty reply stores zero. Anything that is not a
    number stops the program with `Invalid number`.
    */
}

pub mod LET {
    /*!
    ## `[LET] <var> = <exp>` Assigns a variable.
    The word `LET` is optional.
    */
}

pub mod LIST {
    /*!
    ## `LIST [<line>|PAUSE]` Shows the program.
    With a line number only that line is shown. `PAUSE` waits for ENTER
    after every 10 lines.
    */
}

pub mod LOAD {
    /*!
    ## `LOAD <exp>|"<name>"` Replaces the program with a saved one.
    `LOAD 3` reads the program saved as `TINYBAS3`. A quoted name is used
    as written. Files live in the start up directory with a `.txt`
    extension, one numbered line per text line.
    */
}

pub mod MEM {
    /*!
    ## `MEM` Shows the memory left for program lines.
    Every stored line takes 164 bytes.
    */
}

pub mod NEW {
    /*!
    ## `NEW` Erases the program and sets every variable to zero.
    */
}

pub mod PRINT {
    /*!
    ## `PRINT [<exp>|"<text>"][,...][;]`
    A comma prints one space between items. A trailing semicolon leaves
    the cursor on the same line. Two quotes in a row inside text print
    one quote.
    ```text
    PRINT "SHE SAID ""HI"" ", 1 + 1;
    ```
    */
}

pub mod REM {
    /*!
    ## `REM <any>` A remark. The rest of the line is ignored.
    */
}

pub mod RETURN {
    /*!
    ## `RETURN` Returns from the most recent `GOSUB`.
    */
}

pub mod RUN {
    /*!
    ## `RUN` Clears the variables and runs the program from its first line.
    */
}

pub mod SAVE {
    /*!
    ## `SAVE <exp>|"<name>"` Saves the program. Names work as for `LOAD`.
    */
}

pub mod STOP {
    /*!
    ## `STOP` Halts the program, reporting the line it stopped at.
    */
}
